//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Defaults are made
//! unique with a shared counter so unique columns never collide within a test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .population(200_000)
//!     .build()
//!     .await?;
//! let favorite = factory::create_planet_favorite(&db, user.id, planet.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `character` - Create character entities
//! - `star_system` - Create star system entities
//! - `faction` - Create faction entities
//! - `species` - Create species entities
//! - `user_favorite` - Create favorite rows linking users to planets or characters

pub mod character;
pub mod faction;
pub mod helpers;
pub mod planet;
pub mod species;
pub mod star_system;
pub mod user;
pub mod user_favorite;

pub use character::create_character;
pub use faction::create_faction;
pub use planet::create_planet;
pub use species::create_species;
pub use star_system::create_star_system;
pub use user::create_user;
pub use user_favorite::{create_character_favorite, create_planet_favorite};
