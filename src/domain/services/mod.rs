pub mod revenue;
pub mod session_service;
