//! Holocron: a REST backend serving a fictional universe and per-user favorites.

pub mod model;
pub mod server;
