//! Core data types for taxon filtering.
//!
//! - [`Record`]: A single FASTA record (header line plus joined sequence)
//! - [`MatchStrategy`]: Which part of the header the target taxon is matched against
//! - [`MatchSummary`]: Count and names of the records that matched
//!
//! ## Header conventions
//!
//! Headers are kept verbatim, marker included. Two fields are derived from them:
//!
//! | Header | Identifier | Derived label |
//! |--------|------------|---------------|
//! | `>seq2 desc Rhizobium` | `seq2` | `>seq2 desc Rhizobium` |
//! | `>AB1 Bacteria;Proteobacteria;Rhizobium` | `AB1` | `Rhizobium` |

pub mod record;
pub mod summary;
pub mod types;
