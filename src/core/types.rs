use serde::{Deserialize, Serialize};

/// Marker character that starts every FASTA header line
pub const HEADER_MARKER: char = '>';

/// Separator between ranks in a lineage-style header
pub const LINEAGE_SEPARATOR: char = ';';

/// Which part of a header the target taxon is searched in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Search the entire header line as written in the file
    #[default]
    FullHeader,
    /// Search only the label after the last `;` of a lineage header
    DerivedLabel,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::FullHeader => write!(f, "full-header"),
            MatchStrategy::DerivedLabel => write!(f, "derived-label"),
        }
    }
}
