// Adapters: concrete implementations of the core's ports.
//
// Nothing in `core` depends on this tree; wiring happens once, at startup,
// in `main`.

pub mod clock;
pub mod crypto;
pub mod http;
pub mod persistence;
pub mod policy;
