//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database reads and writes for each
//! entity in the universe. Repositories use SeaORM entity models internally and return
//! domain models, so entity types never leak into the service layer. Favorite writes go
//! through `FavoriteRepository`, which is generic over the connection so it can run
//! inside a transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod universe;
pub mod user;

#[cfg(test)]
mod test;
