use std::collections::HashMap;

// Statistical-processing codes (see Code Table 4.10)
const AVERAGE: u8 = 0;
const ACCUMULATION: u8 = 1;
const MAXIMUM: u8 = 2;
const MINIMUM: u8 = 3;

/// Statistical-processing types inferred for legacy nudging analyses, keyed
/// by GRIB1 parameter table version and parameter code.
///
/// The nudging scheme reused the period octets without declaring how the
/// value was processed, so the processing kind has to be recovered from the
/// parameter identity. Only tables 2, 201 and 202 ever carried such fields.
/// The maps are deliberately incomplete: a miss is a decode error for the
/// caller to handle, never an "assume instantaneous" fallback.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LegacyStatTables {
    table2: HashMap<u8, u8>,
    table201: HashMap<u8, u8>,
    table202: HashMap<u8, u8>,
}

impl LegacyStatTables {
    pub fn new() -> Self {
        let table2 = HashMap::from([
            (15, MAXIMUM),      // maximum temperature
            (16, MINIMUM),      // minimum temperature
            (57, ACCUMULATION), // evaporation
            (61, ACCUMULATION), // total precipitation
            (62, ACCUMULATION), // large-scale precipitation
            (63, ACCUMULATION), // convective precipitation
            (78, ACCUMULATION), // convective snowfall
            (79, ACCUMULATION), // large-scale snowfall
            (90, ACCUMULATION), // water runoff
            (111, AVERAGE),     // net short-wave radiation, surface
            (112, AVERAGE),     // net long-wave radiation, surface
            (113, AVERAGE),     // net short-wave radiation, top
            (114, AVERAGE),     // net long-wave radiation, top
            (121, AVERAGE),     // latent heat flux
            (122, AVERAGE),     // sensible heat flux
            (124, AVERAGE),     // u-component of momentum flux
            (125, AVERAGE),     // v-component of momentum flux
        ]);

        let table201 = HashMap::from([
            (5, AVERAGE),        // photosynthetically active radiation
            (20, ACCUMULATION),  // sunshine duration
            (102, ACCUMULATION), // large-scale rain
            (113, ACCUMULATION), // convective rain
            (187, MAXIMUM),      // maximum 10m wind gust
        ]);

        let table202 = HashMap::from([
            (102, ACCUMULATION), // large-scale rain amount
            (187, MAXIMUM),      // maximum wind speed
            (200, AVERAGE),      // averaged surface emissivity
        ]);

        Self {
            table2,
            table201,
            table202,
        }
    }

    /// Looks up the statistical-processing type for a parameter. `None` when
    /// the table version is not covered or the parameter is not listed.
    pub fn stat_type(&self, table_version: u8, parameter: u8) -> Option<u8> {
        let table = match table_version {
            2 => &self.table2,
            201 => &self.table201,
            202 => &self.table202,
            _ => return None,
        };

        table.get(&parameter).copied()
    }
}

impl Default for LegacyStatTables {
    fn default() -> Self {
        Self::new()
    }
}
