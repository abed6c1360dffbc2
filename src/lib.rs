/// CLI and environment-based configuration.
pub mod config;
/// Error types: configuration rejects and build invariant violations.
pub mod error;
/// Fixed, seed-free hash functions for backend ids and lookup keys.
pub mod hash;
/// Logging setup (tracing + env filter).
pub mod logging;
/// Maglev lookup table: permutations, builder, diagnostics.
pub mod table;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Table construction parameters and CLI settings.
pub use config::{Settings, TableConfig};
/// Build errors and result alias.
pub use error::{BuildError, BuildResult, ConfigError};
/// Logging initialization.
pub use logging::init_logging;
/// Table construction and the lookup artifact.
pub use table::{
    build_table, build_table_with, disruption, AssignmentReport, BackendLoad, Disruption,
    LookupTable, Permutation,
};
