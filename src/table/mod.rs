//! Maglev lookup table construction.
//!
//! The pipeline is small and strictly ordered:
//!
//! - `permutation`: per-backend preference sequence over all M slots,
//!   derived from two independent fixed hashes.
//! - `builder`: round-robin greedy fill of the M-slot table from those
//!   sequences.
//! - `lookup`: the immutable slot->backend artifact serving `lookup(key)`.
//! - `report`: per-backend load summary and two-table disruption
//!   diagnostics (pure presentation).

pub mod builder;
pub mod lookup;
pub mod permutation;
pub mod report;

pub use builder::{build_table, build_table_with};
pub use lookup::LookupTable;
pub use permutation::Permutation;
pub use report::{disruption, AssignmentReport, BackendLoad, Disruption};
