use crate::core::record::Record;
use crate::core::types::HEADER_MARKER;

/// The record currently being assembled during a scan.
///
/// Lines are fed one at a time with [`PendingRecord::push_line`]. A record is
/// handed back only when it is closed (by the next header or by
/// [`PendingRecord::finish`]) and its sequence is non-empty.
#[derive(Debug, Default)]
pub struct PendingRecord {
    header: Option<String>,
    sequence: String,
    discarded_lines: usize,
}

impl PendingRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw input line, returning the record it closes, if any.
    pub fn push_line(&mut self, line: &str) -> Option<Record> {
        let line = line.trim();

        if line.starts_with(HEADER_MARKER) {
            let completed = self.close();
            self.header = Some(line.to_string());
            return completed;
        }

        if self.header.is_none() {
            // Data before the first header has no record to belong to
            if !line.is_empty() {
                self.discarded_lines += 1;
            }
            return None;
        }

        self.sequence.push_str(line);
        None
    }

    /// Close the last record at end of input
    #[must_use]
    pub fn finish(mut self) -> Option<Record> {
        self.close()
    }

    /// Non-blank data lines dropped because no header preceded them
    #[must_use]
    pub fn discarded_lines(&self) -> usize {
        self.discarded_lines
    }

    fn close(&mut self) -> Option<Record> {
        let sequence = std::mem::take(&mut self.sequence);
        let header = self.header.take()?;
        if sequence.is_empty() {
            None
        } else {
            Some(Record { header, sequence })
        }
    }
}
