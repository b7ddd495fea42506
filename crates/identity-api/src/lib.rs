//! Identity API — HTTP surface for the Identity service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
