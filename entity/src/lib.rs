//! SeaORM entity definitions for the holocron schema.

pub mod prelude;

pub mod character;
pub mod faction;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod species;
pub mod star_system;
pub mod user;
pub mod user_favorite;
