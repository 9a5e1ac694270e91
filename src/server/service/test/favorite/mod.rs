use crate::server::{
    error::{favorite::FavoriteError, AppError},
    model::favorite::FavoriteTarget,
    service::favorite::FavoriteService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_character_favorite;
mod add_planet_favorite;
mod remove_planet_favorite;
