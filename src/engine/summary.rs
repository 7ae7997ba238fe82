use crate::engine::RecordOutcome;
use crate::models::SkipKind;

/// Row counters for a single run.
///
/// `rows_read` always equals `rows_transformed + rows_skipped`, and the two
/// per-kind skip counters always add up to `rows_skipped`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RunSummary {
    pub rows_read: u64,
    pub rows_transformed: u64,
    pub rows_skipped: u64,
    /// Blank lines and lines without exactly four fields.
    pub skipped_malformed: u64,
    /// Lines whose product id or price is not numeric.
    pub skipped_invalid_numeric: u64
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &RecordOutcome) {
        self.rows_read += 1;

        match outcome {
            RecordOutcome::Transformed(_) => self.rows_transformed += 1,
            RecordOutcome::Skipped(reason) => {
                self.rows_skipped += 1;

                match reason.kind() {
                    SkipKind::MalformedRow => self.skipped_malformed += 1,
                    SkipKind::InvalidNumericField => self.skipped_invalid_numeric += 1
                }
            }
        }
    }
}
