use ising_core::errors::IsingError;
use ising_core::{ReportProvenance, SchemaVersion, Spin};
use serde::{Deserialize, Serialize};

use crate::aggregate::SpinRelation;
use crate::hash::hash_report;
use crate::lattice::{BLOCKS, BLOCK_SIZE, SITES};
use crate::RenormRun;

/// Schema version of [`RenormReport`] payloads.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serialisable form of a single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Enumeration index of the fine configuration.
    pub index: usize,
    /// Fine spins `s1..s6`.
    pub spins: [Spin; SITES],
    /// Block spins `s1', s2'`.
    pub blocks: [Spin; BLOCKS],
    /// Fine ring energy.
    pub h1: i32,
    /// Block ring energy.
    pub h2: i32,
    /// Relation between the block spins.
    pub relation: SpinRelation,
}

/// One `count Exp[exponent k]` term of a coupling equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentTerm {
    /// Fine energy shared by the counted configurations.
    pub exponent: i32,
    /// Number of configurations with that energy.
    pub count: usize,
}

/// Grouped terms for one block-spin relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Relation the class collects.
    pub relation: SpinRelation,
    /// Left-hand side of the class equation.
    pub label: String,
    /// Block ring energy shared by the class.
    pub coarse_energy: i32,
    /// Terms in ascending exponent order.
    pub terms: Vec<ExponentTerm>,
    /// Number of configurations in the class.
    pub total: usize,
}

/// Full serialisable record of a renormalisation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenormReport {
    /// Schema version of the payload.
    pub schema_version: SchemaVersion,
    /// Lattice and tool description.
    pub provenance: ReportProvenance,
    /// Every row in enumeration order.
    pub rows: Vec<ReportRow>,
    /// Equal class first, then unequal.
    pub classes: Vec<ClassSummary>,
    /// Number of configurations across all classes.
    pub total: usize,
    /// Canonical SHA-256 of the report with this field blank.
    pub report_hash: String,
}

/// Builds and hashes the report for `run`.
pub fn build_report(run: &RenormRun) -> Result<RenormReport, IsingError> {
    let rows = run
        .rows()
        .iter()
        .map(|row| ReportRow {
            index: row.configuration().index(),
            spins: *row.configuration().spins(),
            blocks: *row.blocks().spins(),
            h1: row.h1(),
            h2: row.h2(),
            relation: row.relation(),
        })
        .collect();

    let classes = SpinRelation::ALL
        .into_iter()
        .map(|relation| {
            let counts = run.table().class(relation);
            ClassSummary {
                relation,
                label: relation.label().to_string(),
                coarse_energy: relation.coarse_energy(),
                terms: counts
                    .iter()
                    .map(|(exponent, count)| ExponentTerm { exponent, count })
                    .collect(),
                total: counts.total(),
            }
        })
        .collect();

    let provenance = ReportProvenance {
        sites: SITES,
        block_size: BLOCK_SIZE,
        rule: "majority".into(),
        tool_versions: [("ising-rg".to_string(), env!("CARGO_PKG_VERSION").to_string())]
            .into_iter()
            .collect(),
    };

    let mut report = RenormReport {
        schema_version: REPORT_SCHEMA,
        provenance,
        rows,
        classes,
        total: run.table().total(),
        report_hash: String::new(),
    };
    report.report_hash = hash_report(&report)?;
    Ok(report)
}
