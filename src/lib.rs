//! cslit - string literal extractor for C# source trees
//!
//! cslit is a CLI tool and library that finds every string literal in a
//! directory of C# files and reports them as JSON, keyed by file path.
//! Literals are found by a lexical scanner, not a parser, so files that do
//! not compile are still handled.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, file enumeration and parallel extraction
//! - `json_writer`: Atomic JSON report output
//!
//! ```
//! let literals = cslit::core::extract(r#"var b = $"X{1+1}Y";"#);
//! assert_eq!(literals, vec!["X{1+1}Y"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
