use std::io::{self, Write};

use crate::core::types::{MatchStrategy, HEADER_MARKER, LINEAGE_SEPARATOR};

/// A single FASTA record reconstructed from a header and its data lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full header line, marker included, surrounding whitespace removed
    pub header: String,

    /// All data lines of the record concatenated without separators
    pub sequence: String,
}

impl Record {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Name used when reporting the record: the first whitespace-delimited
    /// token of the header with the leading marker removed.
    ///
    /// A header whose marker is followed by whitespace has an empty identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        let token = self.header.split_whitespace().next().unwrap_or("");
        token.strip_prefix(HEADER_MARKER).unwrap_or(token)
    }

    /// Taxon label of a lineage header such as `>id Bacteria;Proteobacteria;Rhizobium`:
    /// the text after the last `;`, trimmed.
    ///
    /// Without any `;` the whole header, marker included, is the label.
    #[must_use]
    pub fn derived_label(&self) -> &str {
        self.header
            .rsplit_once(LINEAGE_SEPARATOR)
            .map_or(self.header.as_str(), |(_, last)| last)
            .trim()
    }

    /// The text a target taxon is searched in
    #[must_use]
    pub fn taxon_field(&self, strategy: MatchStrategy) -> &str {
        match strategy {
            MatchStrategy::FullHeader => &self.header,
            MatchStrategy::DerivedLabel => self.derived_label(),
        }
    }

    /// Header line as written to the matched-records output
    #[must_use]
    pub fn output_header(&self, strategy: MatchStrategy) -> String {
        match strategy {
            MatchStrategy::FullHeader => self.header.clone(),
            MatchStrategy::DerivedLabel => format!("{HEADER_MARKER}{}", self.derived_label()),
        }
    }

    /// Write the record as exactly two lines: header, then the joined sequence.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, strategy: MatchStrategy) -> io::Result<()> {
        writeln!(writer, "{}", self.output_header(strategy))?;
        writeln!(writer, "{}", self.sequence)
    }
}
