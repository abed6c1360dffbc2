pub mod table;

pub use table::{BuildError, BuildResult, ConfigError};
