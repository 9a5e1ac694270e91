//! Transport DTOs shared by every API endpoint.
//!
//! These are the serialized shapes of the domain models. Each server-side domain
//! model converts into one of these through `into_dto`, which is the only place
//! that decides which fields leave the server.

pub mod api;
pub mod character;
pub mod faction;
pub mod favorite;
pub mod planet;
pub mod species;
pub mod star_system;
pub mod user;
