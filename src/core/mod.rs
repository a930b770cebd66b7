//! Core extraction engine.
//!
//! - `file_scanner`: enumerates source units under a root directory
//! - `parsers`: lexical scanners producing literals from source text
//! - `context`: runs the scanner over every unit in parallel
//! - `report`: per-unit results in enumeration order

pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod report;

pub use context::{ExtractionContext, ExtractionOutcome};
pub use parsers::csharp::{Literal, LiteralKind, Scanner, extract};
pub use report::{Report, UnitLiterals, UnitReadFailure};
