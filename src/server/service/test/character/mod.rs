use crate::server::{error::AppError, service::character::CharacterService};
use test_utils::{builder::TestBuilder, factory};

mod get_character;
