pub mod query_composer;
pub mod user_service;

pub use query_composer::*;
