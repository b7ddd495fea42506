//! Identity — User bounded context.
//!
//! Responsible for signing users up: sealing the `SignedUp` event (password
//! hashing, email verification code) and hydrating the `User` aggregate
//! from it.

pub mod application;
pub mod domain;
