// HTTP handlers for the admin write surface.
//
// `cache_refresh` is the one handler with a full request/response contract
// and router wiring. The rest are direct calls into `IamFacade` with typed
// DTOs, mounted illustratively rather than as an exhaustive REST surface.

pub mod cache_refresh;
pub mod roles;
pub mod service_accounts;
pub mod sessions;
pub mod users;

pub use cache_refresh::refresh_cache;
pub use roles::{assign_group_role, assign_user_role, create_role};
pub use service_accounts::{create_service_account, rotate_secret};
pub use sessions::create_session;
pub use users::create_user;
