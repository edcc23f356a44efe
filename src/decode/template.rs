use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timedef::{Decoded, Provenance, Timedef};
use crate::units::{make_same_units, TimeQuantity, TimeUnit};

/// Product definition templates carrying a point-in-time value
const INSTANT_TEMPLATES: RangeInclusive<u16> = 0..=7;

/// Product definition templates carrying a statistically processed value
const STATISTICAL_TEMPLATES: RangeInclusive<u16> = 8..=14;

/// "Analysis and forecast products" (see Code Table 1.4)
const ANALYSIS_AND_FORECAST: u8 = 2;

/// Raw time-range fields of a GRIB2 product definition section, as handed
/// over by the field source. Absent fields are `None`; several branches key
/// on presence, so absence is never conflated with zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTimeRange {
    /// Product Definition Template Number (see Code Table 4.0)
    pub template_number: u16,
    /// Forecast time, in units of `time_unit`
    pub forecast_time: Option<i64>,
    /// Indicator of unit of time range (see Code Table 4.4)
    pub time_unit: Option<u8>,
    /// Statistical processing over the time range (see Code Table 4.10)
    pub stat_type: Option<u8>,
    /// Length of the statistical-processing window, in units of `stat_unit`
    pub stat_length: Option<i64>,
    /// Indicator of unit of time for the window (see Code Table 4.4)
    pub stat_unit: Option<u8>,
    /// Type of processed data in this message (see Code Table 1.4)
    pub type_of_processed_data: Option<u8>,
}

/// Normalizes a template-numbered time range. Branches are mutually
/// exclusive and evaluated in order; each is terminal.
pub fn decode(raw: &TemplateTimeRange) -> Result<Decoded> {
    if let (Some(forecast_time), Some(unit_code)) = (raw.forecast_time, raw.time_unit) {
        if INSTANT_TEMPLATES.contains(&raw.template_number) {
            debug!("Template {} : instantaneous", raw.template_number);
            let unit = TimeUnit::from_grib2(unit_code)?;

            return Ok(Decoded {
                timedef: Timedef::instant(TimeQuantity::new(forecast_time, unit)),
                provenance: Provenance::FullyResolved,
            });
        }
    }

    if let (Some(stat_type), Some(stat_length), Some(stat_unit_code)) =
        (raw.stat_type, raw.stat_length, raw.stat_unit)
    {
        let stat_unit = TimeUnit::from_grib2(stat_unit_code)?;

        if STATISTICAL_TEMPLATES.contains(&raw.template_number)
            && raw.type_of_processed_data == Some(ANALYSIS_AND_FORECAST)
        {
            // The window already spans the full validity period from the
            // reference time.
            debug!("Template {} : statistical over full period", raw.template_number);

            return Ok(Decoded {
                timedef: Timedef {
                    step: Some(TimeQuantity::new(0, stat_unit)),
                    stat_type: Some(stat_type),
                    stat_length: Some(TimeQuantity::new(stat_length, stat_unit)),
                },
                provenance: Provenance::FullyResolved,
            });
        }

        // Probabilistic/derived variants: the window trails the nominal lead
        // time, so the step is their sum under one unit.
        debug!("Template {} : statistical, window trails lead time", raw.template_number);

        let lead_unit = match raw.time_unit {
            Some(code) => TimeUnit::from_grib2(code)?,
            None => stat_unit,
        };
        let lead = TimeQuantity::new(raw.forecast_time.unwrap_or(0), lead_unit);
        let window = TimeQuantity::new(stat_length, stat_unit);

        let (lead, window) = make_same_units(lead, window)?;

        return Ok(Decoded {
            timedef: Timedef {
                step: Some(TimeQuantity::new(lead.value + window.value, lead.unit)),
                stat_type: Some(stat_type),
                stat_length: Some(window),
            },
            provenance: Provenance::FullyResolved,
        });
    }

    if STATISTICAL_TEMPLATES.contains(&raw.template_number)
        && raw.type_of_processed_data == Some(ANALYSIS_AND_FORECAST)
    {
        debug!("Template {} : statistical without window metadata", raw.template_number);

        return Ok(Decoded {
            timedef: Timedef {
                step: Some(TimeQuantity::new(0, TimeUnit::Second)),
                stat_type: None,
                stat_length: None,
            },
            provenance: Provenance::ForecastInitialInstant,
        });
    }

    let step = match (raw.forecast_time, raw.time_unit) {
        (Some(forecast_time), Some(code)) => {
            Some(TimeQuantity::new(forecast_time, TimeUnit::from_grib2(code)?))
        }
        _ => None,
    };

    Ok(Decoded {
        timedef: Timedef {
            step,
            stat_type: None,
            stat_length: None,
        },
        provenance: Provenance::ForecastInitialInstant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(template_number: u16) -> TemplateTimeRange {
        TemplateTimeRange {
            template_number,
            forecast_time: None,
            time_unit: None,
            stat_type: None,
            stat_length: None,
            stat_unit: None,
            type_of_processed_data: None,
        }
    }

    #[test]
    fn instant_template_with_lead_time() {
        let mut input = raw(3);
        input.forecast_time = Some(6);
        input.time_unit = Some(1);

        let decoded = decode(&input).unwrap();
        assert_eq!(
            decoded.timedef,
            Timedef::instant(TimeQuantity::new(6, TimeUnit::Hour))
        );
        assert_eq!(decoded.provenance, Provenance::FullyResolved);
    }

    #[test]
    fn statistical_template_over_full_period() {
        let mut input = raw(8);
        input.forecast_time = Some(0);
        input.time_unit = Some(1);
        input.stat_type = Some(1);
        input.stat_length = Some(24);
        input.stat_unit = Some(1);
        input.type_of_processed_data = Some(ANALYSIS_AND_FORECAST);

        let decoded = decode(&input).unwrap();
        assert_eq!(decoded.timedef.step, Some(TimeQuantity::new(0, TimeUnit::Hour)));
        assert_eq!(decoded.timedef.stat_type, Some(1));
        assert_eq!(
            decoded.timedef.stat_length,
            Some(TimeQuantity::new(24, TimeUnit::Hour))
        );
    }

    #[test]
    fn probabilistic_template_sums_lead_and_window() {
        // forecast time 27h, window 24h : reported as one 51h step
        let mut input = raw(10);
        input.forecast_time = Some(27);
        input.time_unit = Some(1);
        input.stat_type = Some(0);
        input.stat_length = Some(24);
        input.stat_unit = Some(1);
        input.type_of_processed_data = Some(1);

        let decoded = decode(&input).unwrap();
        assert_eq!(decoded.timedef.step, Some(TimeQuantity::new(51, TimeUnit::Hour)));
        assert_eq!(
            decoded.timedef.stat_length,
            Some(TimeQuantity::new(24, TimeUnit::Hour))
        );
        assert_eq!(decoded.provenance, Provenance::FullyResolved);
    }

    #[test]
    fn probabilistic_template_reconciles_odd_units() {
        // forecast time 90m, window 1h : unified under minutes
        let mut input = raw(11);
        input.forecast_time = Some(90);
        input.time_unit = Some(0);
        input.stat_type = Some(2);
        input.stat_length = Some(1);
        input.stat_unit = Some(1);
        input.type_of_processed_data = Some(1);

        let decoded = decode(&input).unwrap();
        assert_eq!(
            decoded.timedef.step,
            Some(TimeQuantity::new(150, TimeUnit::Minute))
        );
        assert_eq!(
            decoded.timedef.stat_length,
            Some(TimeQuantity::new(60, TimeUnit::Minute))
        );
    }

    #[test]
    fn discriminator_only_yields_partial_record() {
        let mut input = raw(9);
        input.type_of_processed_data = Some(ANALYSIS_AND_FORECAST);

        let decoded = decode(&input).unwrap();
        assert_eq!(decoded.timedef.step, Some(TimeQuantity::new(0, TimeUnit::Second)));
        assert_eq!(decoded.timedef.stat_type, None);
        assert_eq!(decoded.timedef.stat_length, None);
        assert_eq!(decoded.provenance, Provenance::ForecastInitialInstant);
    }

    #[test]
    fn fallback_keeps_raw_lead_time() {
        let mut input = raw(20);
        input.forecast_time = Some(3);
        input.time_unit = Some(10);

        let decoded = decode(&input).unwrap();
        assert_eq!(
            decoded.timedef.step,
            Some(TimeQuantity::new(3, TimeUnit::Hours3))
        );
        assert_eq!(decoded.timedef.stat_type, None);
        assert_eq!(decoded.provenance, Provenance::ForecastInitialInstant);
    }

    #[test]
    fn fallback_with_nothing_known_is_empty() {
        let decoded = decode(&raw(20)).unwrap();

        assert_eq!(decoded.timedef.step, None);
        assert_eq!(decoded.timedef.stat_type, None);
        assert_eq!(decoded.timedef.stat_length, None);
    }

    #[test]
    fn statistical_template_without_discriminator_sums() {
        // Template in the statistical range but not flagged analysis/forecast
        // takes the trailing-window arm, not the full-period one.
        let mut input = raw(8);
        input.forecast_time = Some(6);
        input.time_unit = Some(1);
        input.stat_type = Some(1);
        input.stat_length = Some(6);
        input.stat_unit = Some(1);

        let decoded = decode(&input).unwrap();
        assert_eq!(decoded.timedef.step, Some(TimeQuantity::new(12, TimeUnit::Hour)));
        assert_eq!(decoded.timedef.stat_type, Some(1));
    }
}
