use crate::timedef::{Timedef, STAT_PROC_INSTANT};

/// Lookup of a numeric code into an (abbreviation, description) pair,
/// injected by the host. Queries are by exact code; misses are `None`.
pub trait CodeTable {
    fn lookup(&self, code: u16) -> Option<(&str, &str)>;
}

/// Built-in statistical-processing code table (see Code Table 4.10). Hosts
/// with their own table files inject their own `CodeTable` instead.
pub struct StatProcessCodes;

impl CodeTable for StatProcessCodes {
    fn lookup(&self, code: u16) -> Option<(&str, &str)> {
        Some(match code {
            0 => ("avg", "Average"),
            1 => ("accum", "Accumulation"),
            2 => ("max", "Maximum"),
            3 => ("min", "Minimum"),
            4 => ("diff", "Difference (end minus beginning)"),
            5 => ("rms", "Root mean square"),
            6 => ("sd", "Standard deviation"),
            7 => ("cov", "Covariance"),
            8 => ("diffinv", "Difference (beginning minus end)"),
            9 => ("ratio", "Ratio"),
            10 => ("stdanom", "Standardized anomaly"),
            11 => ("sum", "Summation"),
            _ => return None,
        })
    }
}

/// Renders a record as a human-readable description. Best-effort display:
/// unknown or absent processing codes yield `None` so the caller can fall
/// back to another formatter, they never raise.
pub fn describe(timedef: &Timedef, codes: &dyn CodeTable) -> Option<String> {
    match timedef.stat_type {
        Some(STAT_PROC_INSTANT) => {
            let step_is_zero = timedef.step.map_or(true, |step| step.is_zero());
            let length_is_zero = timedef.stat_length.map_or(true, |length| length.is_zero());

            if step_is_zero && length_is_zero {
                Some(String::from("analysis/observation, instantaneous"))
            } else {
                let step = timedef.step?;
                Some(format!("forecast at t+{}, instantaneous", step))
            }
        }
        Some(code) => {
            let (_, description) = codes.lookup(code as u16)?;
            let mut out = String::from(description);

            if let Some(length) = timedef.stat_length {
                out.push_str(&format!(" over {}", length));
            }

            match timedef.step {
                Some(step) if step.value < 0 => out.push_str(" before reference time"),
                Some(step) => out.push_str(&format!(" at forecast time {}", step)),
                None => {}
            }

            Some(out)
        }
        None => None,
    }
}
