use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Default lookup table size: prime, comfortable for small demo sets.
/// Production embedders should size M >> N (the paper suggests M >= 100*N).
pub const DEFAULT_TABLE_SIZE: usize = 113;

/// Minimal required ratio M/N. Below this the balance guarantees are too
/// weak to be meaningful.
pub const DEFAULT_MIN_SLOT_RATIO: usize = 2;

/// Table construction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of slots M. Must be prime and strictly greater than the
    /// backend count.
    pub table_size: usize,
    /// Reject builds where M < min_slot_ratio * N.
    pub min_slot_ratio: usize,
}

impl TableConfig {
    pub fn new(table_size: usize) -> Self {
        Self {
            table_size,
            min_slot_ratio: DEFAULT_MIN_SLOT_RATIO,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SIZE)
    }
}

/// CLI settings loaded from the environment.
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    pub table_size: usize,
    pub log_level: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Adding default values
            .set_default("table_size", DEFAULT_TABLE_SIZE as i64)?
            .set_default("log_level", "info")?
            // Add environment variables with the MAGHASH_ prefix
            .add_source(Environment::with_prefix("MAGHASH"))
            .build()?;

        // Deserialize the configuration into our structure.
        cfg.try_deserialize()
    }
}
