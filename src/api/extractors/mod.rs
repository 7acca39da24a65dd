pub mod auth;
pub mod guard;
pub mod input;
pub mod maybe_auth;
