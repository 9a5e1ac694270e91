//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing favorite rules such as existence and uniqueness
//! - **Transaction Management**: Running check-then-insert sequences atomically
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod character;
pub mod favorite;
pub mod planet;
pub mod universe;
pub mod user;

#[cfg(test)]
mod test;
