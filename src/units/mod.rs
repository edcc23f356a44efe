use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unit of a time range or forecast step (see Code Table 4.4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Hours3,
    Hours6,
    Hours12,
    Day,
    Month,
    Year,
    Decade,
    /// Normal (30 years)
    Normal,
    Century,
    Missing,
}

/// The two mutually non-convertible groups of time units. Days are not a
/// fixed fraction of a month, so no value may cross this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    /// Fixed-ratio subdivisions of a day
    Clock,
    /// Subdivisions of a year
    Calendar,
}

impl TimeUnit {
    /// Maps a GRIB2 "indicator of unit of time range" (see Code Table 4.4).
    pub fn from_grib2(code: u8) -> Result<Self> {
        Ok(match code {
            0 => TimeUnit::Minute,
            1 => TimeUnit::Hour,
            2 => TimeUnit::Day,
            3 => TimeUnit::Month,
            4 => TimeUnit::Year,
            5 => TimeUnit::Decade,
            6 => TimeUnit::Normal,
            7 => TimeUnit::Century,
            10 => TimeUnit::Hours3,
            11 => TimeUnit::Hours6,
            12 => TimeUnit::Hours12,
            13 => TimeUnit::Second,
            255 => TimeUnit::Missing,
            n => return Err(Error::UnknownUnitCode(n)),
        })
    }

    /// Maps a GRIB1 "unit of time range" (see Code Table 4). Identical to
    /// the GRIB2 table except that seconds are code 254 and 13 is unassigned.
    pub fn from_grib1(code: u8) -> Result<Self> {
        match code {
            254 => Ok(TimeUnit::Second),
            13 => Err(Error::UnknownUnitCode(13)),
            n => Self::from_grib2(n),
        }
    }

    pub fn family(&self) -> Option<UnitFamily> {
        match self {
            TimeUnit::Second
            | TimeUnit::Minute
            | TimeUnit::Hour
            | TimeUnit::Hours3
            | TimeUnit::Hours6
            | TimeUnit::Hours12
            | TimeUnit::Day => Some(UnitFamily::Clock),
            TimeUnit::Month
            | TimeUnit::Year
            | TimeUnit::Decade
            | TimeUnit::Normal
            | TimeUnit::Century => Some(UnitFamily::Calendar),
            TimeUnit::Missing => None,
        }
    }

    // Position in the family's ordering chain, finest unit first. The order
    // is part of the domain: "3 hours" and "hour" are not comparable by
    // generic magnitude arithmetic.
    fn rank(&self) -> u8 {
        match self {
            TimeUnit::Second => 0,
            TimeUnit::Minute => 1,
            TimeUnit::Hour => 2,
            TimeUnit::Hours3 => 3,
            TimeUnit::Hours6 => 4,
            TimeUnit::Hours12 => 5,
            TimeUnit::Day => 6,
            TimeUnit::Month => 0,
            TimeUnit::Year => 1,
            TimeUnit::Decade => 2,
            TimeUnit::Normal => 3,
            TimeUnit::Century => 4,
            TimeUnit::Missing => 0,
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let abbrev = match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Hours3 => "3h",
            TimeUnit::Hours6 => "6h",
            TimeUnit::Hours12 => "12h",
            TimeUnit::Day => "D",
            TimeUnit::Month => "M",
            TimeUnit::Year => "Y",
            TimeUnit::Decade => "10Y",
            TimeUnit::Normal => "30Y",
            TimeUnit::Century => "C",
            TimeUnit::Missing => "missing",
        };
        write!(f, "{}", abbrev)
    }
}

/// An integer duration with its declared unit. The unit is kept as declared
/// because it stays meaningful downstream (display, provenance); this is not
/// a seconds-since-epoch duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeQuantity {
    pub value: i64,
    pub unit: TimeUnit,
}

impl TimeQuantity {
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl Display for TimeQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Orders two units within the same family. Fails with `IncompatibleUnits`
/// across families, and for `Missing` against anything but itself.
pub fn compare(u1: TimeUnit, u2: TimeUnit) -> Result<Ordering> {
    if u1 == u2 {
        return Ok(Ordering::Equal);
    }

    match (u1.family(), u2.family()) {
        (Some(f1), Some(f2)) if f1 == f2 => Ok(u1.rank().cmp(&u2.rank())),
        _ => Err(Error::IncompatibleUnits(u1, u2)),
    }
}

/// Moves one link up the family's conversion chain, only when the division
/// is exact. Non-exact values and maximal units (day, normal, century,
/// missing) are returned unchanged, never rounded.
pub fn enlarge(q: TimeQuantity) -> TimeQuantity {
    let (ratio, coarser) = match q.unit {
        TimeUnit::Second => (60, TimeUnit::Minute),
        TimeUnit::Minute => (60, TimeUnit::Hour),
        TimeUnit::Hour => (24, TimeUnit::Day),
        TimeUnit::Hours3 => (2, TimeUnit::Hours6),
        TimeUnit::Hours6 => (2, TimeUnit::Hours12),
        TimeUnit::Hours12 => (2, TimeUnit::Day),
        TimeUnit::Month => (12, TimeUnit::Year),
        TimeUnit::Year => (10, TimeUnit::Decade),
        TimeUnit::Decade => (10, TimeUnit::Century),
        TimeUnit::Day | TimeUnit::Normal | TimeUnit::Century | TimeUnit::Missing => return q,
    };

    if q.value % ratio == 0 {
        TimeQuantity::new(q.value / ratio, coarser)
    } else {
        q
    }
}

/// Moves one link down the family's conversion chain, exact by construction.
/// Minimal units (second, month, missing) are returned unchanged.
pub fn restrict(q: TimeQuantity) -> TimeQuantity {
    let (ratio, finer) = match q.unit {
        TimeUnit::Minute => (60, TimeUnit::Second),
        TimeUnit::Hour => (60, TimeUnit::Minute),
        TimeUnit::Day => (24, TimeUnit::Hour),
        TimeUnit::Hours3 => (3, TimeUnit::Hour),
        TimeUnit::Hours6 => (2, TimeUnit::Hours3),
        TimeUnit::Hours12 => (2, TimeUnit::Hours6),
        TimeUnit::Year => (12, TimeUnit::Month),
        TimeUnit::Decade => (10, TimeUnit::Year),
        TimeUnit::Normal => (3, TimeUnit::Decade),
        TimeUnit::Century => (10, TimeUnit::Decade),
        TimeUnit::Second | TimeUnit::Month | TimeUnit::Missing => return q,
    };

    TimeQuantity::new(q.value * ratio, finer)
}

/// Brings two quantities to a common unit, or fails.
///
/// Enlarging runs first because it keeps magnitudes small; restricting is
/// the fallback since it is always exact but can produce very large values.
/// Each iteration acts on the side whose unit currently compares smaller
/// (enlarge phase) or larger (restrict phase).
pub fn make_same_units(
    mut a: TimeQuantity,
    mut b: TimeQuantity,
) -> Result<(TimeQuantity, TimeQuantity)> {
    if a.unit == b.unit {
        return Ok((a, b));
    }

    loop {
        match compare(a.unit, b.unit)? {
            Ordering::Equal => return Ok((a, b)),
            Ordering::Less => {
                let enlarged = enlarge(a);
                if enlarged == a {
                    break;
                }
                a = enlarged;
            }
            Ordering::Greater => {
                let enlarged = enlarge(b);
                if enlarged == b {
                    break;
                }
                b = enlarged;
            }
        }
    }

    loop {
        match compare(a.unit, b.unit)? {
            Ordering::Equal => return Ok((a, b)),
            Ordering::Less => {
                let restricted = restrict(b);
                if restricted == b {
                    break;
                }
                b = restricted;
            }
            Ordering::Greater => {
                let restricted = restrict(a);
                if restricted == a {
                    break;
                }
                a = restricted;
            }
        }
    }

    Err(Error::UnreconcilableUnits(a.unit, b.unit))
}
