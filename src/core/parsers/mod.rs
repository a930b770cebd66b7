//! Source file parsers.
//!
//! - `csharp`: mode-based lexical scanner extracting C# string literals

pub mod csharp;
