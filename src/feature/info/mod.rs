//! Information about the application.

pub mod info_api;
