//! Greets people by name.

pub mod greeting_api;
pub mod greeting_service;
