//! Value objects - immutable domain primitives

mod content;
mod snowflake;

pub use content::{ContentType, InteractionStatus, InteractionType};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
