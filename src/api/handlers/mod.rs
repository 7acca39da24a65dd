pub mod admin;
pub mod auth;
pub mod contact;
pub mod owner;
pub mod system;
pub mod tenant;
