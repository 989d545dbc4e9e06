#![deny(missing_docs)]
#![doc = "Majority-rule block-spin renormalisation of the periodic six-site Ising ring onto two block spins."]

/// Grouping of configurations by block-spin relation.
pub mod aggregate;
/// Majority-rule coarse graining.
pub mod block;
/// Exhaustive configuration enumeration.
pub mod enumerate;
/// Periodic nearest-neighbour energy.
pub mod energy;
/// Canonical hashing helpers for reports.
pub mod hash;
/// Ring geometry constants and fine configurations.
pub mod lattice;
/// Plain-text table and equation rendering.
pub mod render;
/// Serializable run reports.
pub mod report;
/// Serde helpers for JSON artefacts.
#[path = "serde.rs"]
pub mod serde_io;
/// Invariant checks over a completed run.
pub mod verify;

use tracing::debug;

pub use aggregate::{ExponentCounts, GroupedExponentTable, SpinRelation};
pub use block::{block_majority, majority_rule, BlockSpins};
pub use energy::{ring_energy, try_ring_energy};
pub use enumerate::{configurations, Configurations};
pub use lattice::{Configuration, BLOCKS, BLOCK_SIZE, CONFIGURATION_COUNT, SITES};
pub use report::{build_report, RenormReport};
pub use verify::verify_run;

/// One enumerated configuration with its coarse pair and both energies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenormRow {
    configuration: Configuration,
    blocks: BlockSpins,
    h1: i32,
    h2: i32,
}

impl RenormRow {
    /// Derives the block spins and energies of `configuration`.
    pub fn new(configuration: Configuration) -> Self {
        let blocks = BlockSpins::coarse_grain(&configuration);
        Self {
            h1: ring_energy(configuration.spins()),
            h2: ring_energy(blocks.spins()),
            configuration,
            blocks,
        }
    }

    /// Fine configuration the row was derived from.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Coarse-grained block spins.
    pub fn blocks(&self) -> &BlockSpins {
        &self.blocks
    }

    /// Energy of the six-site ring.
    pub fn h1(&self) -> i32 {
        self.h1
    }

    /// Energy of the two-site block ring.
    pub fn h2(&self) -> i32 {
        self.h2
    }

    /// Relation between the two block spins.
    pub fn relation(&self) -> SpinRelation {
        self.blocks.relation()
    }
}

/// Complete renormalisation: every row in enumeration order plus the grouped counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenormRun {
    rows: Vec<RenormRow>,
    table: GroupedExponentTable,
}

impl RenormRun {
    /// Aggregates an arbitrary set of rows.
    pub fn from_rows(rows: Vec<RenormRow>) -> Self {
        let table = GroupedExponentTable::from_rows(&rows);
        Self { rows, table }
    }

    /// Rows in the order they were supplied.
    pub fn rows(&self) -> &[RenormRow] {
        &self.rows
    }

    /// Grouped exponent counts.
    pub fn table(&self) -> &GroupedExponentTable {
        &self.table
    }
}

/// Enumerates all configurations, coarse grains them and groups their energies.
pub fn renormalize() -> RenormRun {
    let rows: Vec<RenormRow> = configurations().map(RenormRow::new).collect();
    let run = RenormRun::from_rows(rows);
    debug!(
        rows = run.rows.len(),
        equal = run.table.class(SpinRelation::Equal).total(),
        unequal = run.table.class(SpinRelation::Unequal).total(),
        "renormalised six-site ring"
    );
    run
}
