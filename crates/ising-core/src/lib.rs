#![deny(missing_docs)]
#![doc = "Core spin primitives and shared error types for the renorm-ising workspace."]

pub mod errors;
pub mod provenance;
mod spin;

pub use errors::{ErrorInfo, IsingError};
pub use provenance::{ReportProvenance, SchemaVersion};
pub use spin::Spin;
