mod character;
mod favorite;
mod planet;
mod universe;
mod user;
