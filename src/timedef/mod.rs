use serde::{Deserialize, Serialize};

use crate::units::TimeQuantity;

/// "No statistical processing", i.e. an instantaneous value (see Code Table 4.10)
pub const STAT_PROC_INSTANT: u8 = 254;
/// "Missing" statistical processing (see Code Table 4.10)
pub const STAT_PROC_MISSING: u8 = 255;

/// Canonical time-range record: what period a value summarizes, and how.
///
/// Absent fields are `None`, never a sentinel integer; both decoders may
/// emit partial records when the source encoding does not carry enough to
/// resolve them fully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timedef {
    /// Offset from the reference time to the start of the validity period
    pub step: Option<TimeQuantity>,
    /// Kind of statistical processing applied over the validity period
    /// (see Code Table 4.10)
    pub stat_type: Option<u8>,
    /// Duration of the statistical-processing window
    pub stat_length: Option<TimeQuantity>,
}

impl Timedef {
    /// An instantaneous value at `step`. The zero-length window in the step's
    /// unit is the decoder-enforced postcondition of `STAT_PROC_INSTANT`.
    pub fn instant(step: TimeQuantity) -> Self {
        Self {
            step: Some(step),
            stat_type: Some(STAT_PROC_INSTANT),
            stat_length: Some(TimeQuantity::new(0, step.unit)),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.stat_type == Some(STAT_PROC_INSTANT)
    }
}

/// How far the decoder could resolve the record; handed to the metadata sink
/// alongside the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// The record fully describes the validity period
    FullyResolved,
    /// Only the forecast initial instant is known; statistical metadata, if
    /// any, was not resolvable at this layer
    ForecastInitialInstant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub timedef: Timedef,
    pub provenance: Provenance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TimeQuantity, TimeUnit};

    #[test]
    fn instant_zeroes_the_window() {
        let timedef = Timedef::instant(TimeQuantity::new(6, TimeUnit::Hour));

        assert!(timedef.is_instant());
        assert_eq!(timedef.stat_type, Some(STAT_PROC_INSTANT));
        assert_eq!(timedef.stat_length, Some(TimeQuantity::new(0, TimeUnit::Hour)));
    }
}
