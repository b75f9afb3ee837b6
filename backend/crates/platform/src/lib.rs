//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification (X-Forwarded-For / User-Agent extraction)
//! - Rate limiting infrastructure

pub mod client;
pub mod rate_limit;
