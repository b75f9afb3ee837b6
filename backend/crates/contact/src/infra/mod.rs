//! Infrastructure Layer
//!
//! Database and SMTP implementations of the domain ports.

pub mod postgres;
pub mod smtp;
