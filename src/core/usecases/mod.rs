//! The interface boundary between the core domain and the outside world.
//!
//! Every repository, crypto primitive, and external service the core
//! depends on is named here as a trait. `core` never imports an adapter
//! type directly — wiring happens once, at startup, in `main`.

pub mod ports;

pub use ports::*;
