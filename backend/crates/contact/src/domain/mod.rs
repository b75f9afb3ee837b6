//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (ContactMessage, StatusCheck)
//! - Domain value objects (ContactName, EmailAddress, MessageBody)
//! - Repository traits (interfaces)
//! - Notifier trait (email port)

pub mod entities;
pub mod notifier;
pub mod repository;
pub mod value_objects;
