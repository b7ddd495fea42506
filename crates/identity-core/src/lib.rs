//! Identity Core — shared event-sourcing abstractions.
//!
//! This crate defines the fundamental traits and types that the Identity
//! bounded context depends on: the event envelope, the aggregate seams, and
//! the collaborator traits for time, verification codes and password
//! hashing. It contains no persistence code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod password;
pub mod repository;
pub mod verification;
