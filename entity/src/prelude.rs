pub use super::character::Entity as Character;
pub use super::faction::Entity as Faction;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::star_system::Entity as StarSystem;
pub use super::user::Entity as User;
pub use super::user_favorite::Entity as UserFavorite;
