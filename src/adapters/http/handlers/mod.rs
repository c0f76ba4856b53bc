// HTTP handlers for all endpoints

/*
This module defines all HTTP request handlers.

 - `admin`: the IAM write surface. Handlers deserialize requests, validate
   structure via DTO.validate(), call straight into `IamFacade`, and project
   `CoreError` to `HttpError`. No business logic lives here.
*/

pub mod admin;

pub use admin::{
    assign_group_role, assign_user_role, create_role, create_service_account, create_session,
    create_user, refresh_cache, rotate_secret,
};
