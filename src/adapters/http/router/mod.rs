// HTTP router module

mod admin_router;
mod router;

pub use admin_router::admin_routes;
pub use router::create_router;
