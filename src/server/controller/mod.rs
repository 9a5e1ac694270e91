//! HTTP request handlers.
//!
//! Controllers extract request data, resolve the current user where needed, call the
//! matching service and wrap the result in the JSON envelope clients expect. Each handler
//! carries a `#[utoipa::path]` annotation collected by the router.

pub mod character;
pub mod extract;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod universe;
pub mod user;

#[cfg(test)]
mod test;
