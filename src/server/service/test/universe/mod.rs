use crate::server::{error::AppError, service::universe::UniverseService};
use test_utils::{builder::TestBuilder, factory};
