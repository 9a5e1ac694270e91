//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Relationships are one-directional:
//! a `Favorite` knows its owner and target, while users, planets and characters only
//! carry the favorites fetched for them by an explicit query.

pub mod character;
pub mod faction;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod star_system;
pub mod user;
