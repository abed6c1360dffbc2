pub mod settings;

pub use settings::{Settings, TableConfig, DEFAULT_MIN_SLOT_RATIO, DEFAULT_TABLE_SIZE};
