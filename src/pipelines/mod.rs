pub mod accessories;
pub mod phones;

pub use accessories::*;
pub use phones::*;

use std::fmt;

use crate::error::RowRejection;

/// Row accounting for one pass over a source sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Records produced
    pub emitted: usize,
    pub skipped_blank: usize,
    pub skipped_short: usize,
}

impl PipelineStats {
    pub fn record_emitted(&mut self) {
        self.rows_read += 1;
        self.emitted += 1;
    }

    pub fn record_rejection(&mut self, rejection: &RowRejection) {
        self.rows_read += 1;
        match rejection {
            RowRejection::Blank => self.skipped_blank += 1,
            RowRejection::Short { .. } => self.skipped_short += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_short
    }

    pub fn merge(&mut self, other: &PipelineStats) {
        self.rows_read += other.rows_read;
        self.emitted += other.emitted;
        self.skipped_blank += other.skipped_blank;
        self.skipped_short += other.skipped_short;
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} read, {} emitted, {} blank, {} short",
            self.rows_read, self.emitted, self.skipped_blank, self.skipped_short
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accounting() {
        let mut stats = PipelineStats::default();
        stats.record_emitted();
        stats.record_rejection(&RowRejection::Blank);
        stats.record_rejection(&RowRejection::Short {
            expected: 6,
            found: 2,
        });

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.emitted, 1);
        assert_eq!(stats.skipped(), 2);
        assert_eq!(stats.to_string(), "3 read, 1 emitted, 1 blank, 1 short");

        let mut total = PipelineStats::default();
        total.merge(&stats);
        total.merge(&stats);
        assert_eq!(total.rows_read, 6);
        assert_eq!(total.emitted, 2);
    }
}
