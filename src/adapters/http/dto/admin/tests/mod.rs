mod sessions_tests;
mod roles_tests;
