mod fakes;
mod bearer_token_authenticator_tests;
