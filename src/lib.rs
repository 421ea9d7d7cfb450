//! A web service that greets people.
//!
//! The greeting routes own the root namespace; documentation and
//! operational endpoints live under `/api`.

pub mod app;
pub mod feature;
pub mod infra;
