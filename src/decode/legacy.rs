use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tables::LegacyStatTables;
use crate::timedef::{Decoded, Provenance, Timedef};
use crate::units::{TimeQuantity, TimeUnit};

/// Time range indicator reserved for nudging analyses (see Code Table 5)
const NUDGING_INDICATOR: u8 = 13;

/// With indicator 10 the two period octets hold one 16-bit value.
const COMBINED_PERIOD_INDICATOR: u8 = 10;

/// Centres known to emit nudging analyses with indicator 13.
const NUDGING_CENTRES: [u16; 3] = [78, 215, 250];

const UNIT_MISSING: u8 = 255;

/// Raw time-range fields of a GRIB1 product definition section, as handed
/// over by the field source. Integers are raw octet values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTimeRange {
    /// Time range indicator (see Code Table 5)
    pub time_range_indicator: u8,
    /// Period of time P1 (octet 19)
    pub p1: u8,
    /// Period of time P2 (octet 20)
    pub p2: u8,
    /// Unit of time range (see Code Table 4)
    pub unit_of_time_range: u8,
    /// Parameter table version number
    pub table_version: u8,
    /// Indicator of parameter (see Code Table 2)
    pub parameter: u8,
    /// Identification of originating/generating centre (see Code Table 0)
    pub centre: u16,
}

/// Normalizes a legacy indicator + P1/P2 time range.
pub fn decode(raw: &LegacyTimeRange, tables: &LegacyStatTables) -> Result<Decoded> {
    if raw.time_range_indicator == NUDGING_INDICATOR && NUDGING_CENTRES.contains(&raw.centre) {
        decode_nudging(raw, tables)
    } else {
        decode_general(raw)
    }
}

fn decode_nudging(raw: &LegacyTimeRange, tables: &LegacyStatTables) -> Result<Decoded> {
    debug!(
        "Nudging analysis from centre {} : P1={} P2={}",
        raw.centre, raw.p1, raw.p2
    );

    // A missing unit code defaults to seconds for nudging products.
    let unit = match raw.unit_of_time_range {
        UNIT_MISSING => TimeUnit::Second,
        code => TimeUnit::from_grib1(code)?,
    };

    if raw.p1 == 0 && raw.p2 == 0 {
        return Ok(Decoded {
            timedef: Timedef::instant(TimeQuantity::new(0, unit)),
            provenance: Provenance::FullyResolved,
        });
    }

    if raw.p1 > raw.p2 {
        return Err(Error::InvalidPeriod {
            p1: raw.p1,
            p2: raw.p2,
        });
    }

    let stat_type = tables
        .stat_type(raw.table_version, raw.parameter)
        .ok_or(Error::UnknownLegacyParameter {
            table_version: raw.table_version,
            parameter: raw.parameter,
        })?;

    let length = raw.p2 as i64 - raw.p1 as i64;

    Ok(Decoded {
        timedef: Timedef {
            step: Some(TimeQuantity::new(0, unit)),
            stat_type: Some(stat_type),
            stat_length: Some(TimeQuantity::new(length, unit)),
        },
        provenance: Provenance::FullyResolved,
    })
}

fn decode_general(raw: &LegacyTimeRange) -> Result<Decoded> {
    let unit = TimeUnit::from_grib1(raw.unit_of_time_range)?;

    let step = if raw.time_range_indicator == COMBINED_PERIOD_INDICATOR {
        raw.p1 as i64 * 256 + raw.p2 as i64
    } else {
        raw.p1 as i64
    };

    Ok(Decoded {
        timedef: Timedef {
            step: Some(TimeQuantity::new(step, unit)),
            stat_type: None,
            stat_length: None,
        },
        provenance: Provenance::ForecastInitialInstant,
    })
}
