use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Running tally of the records emitted by a filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Number of matched records
    pub count: usize,

    /// Identifiers of matched records, in input order
    pub names: Vec<String>,
}

impl MatchSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one more emitted record
    pub fn record(&mut self, name: impl Into<String>) {
        self.count += 1;
        self.names.push(name.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Write the plain-text report:
    ///
    /// ```text
    /// Number of sequences found: 1
    /// Names of the sequences:
    /// seq2
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Number of sequences found: {}", self.count)?;
        writeln!(writer, "Names of the sequences:")?;
        for name in &self.names {
            writeln!(writer, "{name}")?;
        }
        Ok(())
    }

    /// Write the report as a pretty-printed JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut summary = MatchSummary::new();
        assert!(summary.is_empty());
        summary.record("seq2");
        summary.record("seq1");
        assert_eq!(summary.count, 2);
        assert_eq!(summary.names, vec!["seq2", "seq1"]);
    }

    #[test]
    fn test_write_text() {
        let mut summary = MatchSummary::new();
        summary.record("seq2");

        let mut out = Vec::new();
        summary.write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of sequences found: 1\nNames of the sequences:\nseq2\n"
        );
    }

    #[test]
    fn test_write_text_empty() {
        let mut out = Vec::new();
        MatchSummary::new().write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of sequences found: 0\nNames of the sequences:\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut summary = MatchSummary::new();
        summary.record("seq2");

        let mut out = Vec::new();
        summary.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["names"][0], "seq2");
    }
}
