use crate::server::{error::AppError, service::user::UserService};
use test_utils::{builder::TestBuilder, factory};

mod get_all_users;
mod get_user;
