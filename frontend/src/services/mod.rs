pub mod api;
pub mod platform;
