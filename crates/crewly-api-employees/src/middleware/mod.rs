//! Middleware for the employee administration API.

pub mod admin_guard;

pub use admin_guard::admin_guard;
