//! # fasta-taxon-filter
//!
//! Extract the records of a FASTA file whose header carries a given taxon label.
//!
//! Reference databases such as SILVA or GTDB put a taxonomic lineage in every
//! header (`>AB123.1 Bacteria;Proteobacteria;...;Rhizobium`). Pulling out all
//! the sequences of one genus is a single linear scan: rebuild each record from
//! its (possibly wrapped) lines, test the header, and keep what matches.
//!
//! ## Features
//!
//! - **Two match strategies**: anywhere in the header, or only in the label after the last `;`
//! - **Wrapped sequences**: data lines are joined into one line per record
//! - **Summary report**: count and names of the matched records, as text or JSON
//! - **Compressed input**: `.gz`/`.bgz` files are decompressed on the fly
//!
//! ## Example
//!
//! ```rust
//! use fasta_taxon_filter::{MatchStrategy, TaxonFilter};
//!
//! let fasta = ">AB1 Bacteria;Rhizobiales;Rhizobium\nACGT\nAC\n>AB2 Bacteria;Bacillales;Bacillus\nTTTT\n";
//!
//! let filter = TaxonFilter::new("Rhizobium", MatchStrategy::DerivedLabel);
//! let mut out = Vec::new();
//! let summary = filter.extract(fasta.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), ">Rhizobium\nACGTAC\n");
//! assert_eq!(summary.names, vec!["AB1"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, match strategies and the match summary
//! - [`filter`]: The single-pass filter and its error type
//! - [`parsing`]: Opening plain or compressed FASTA input
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod filter;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::record::Record;
pub use core::summary::MatchSummary;
pub use core::types::MatchStrategy;
pub use filter::{filter, FilterError, TaxonFilter};
