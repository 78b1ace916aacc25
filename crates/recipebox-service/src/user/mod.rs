//! The caller's own account.

pub mod service;

pub use service::UserService;
