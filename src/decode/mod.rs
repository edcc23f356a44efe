pub mod legacy;
pub mod template;

use serde::{Deserialize, Serialize};

pub use legacy::LegacyTimeRange;
pub use template::TemplateTimeRange;

use crate::error::Result;
use crate::tables::LegacyStatTables;
use crate::timedef::Decoded;

/// The two source encodings this subsystem normalizes from. The set is
/// closed, fixed by the WMO editions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Legacy(LegacyTimeRange),
    Template(TemplateTimeRange),
}

/// Normalizes one message's raw time-range fields into the canonical record.
pub fn decode(encoding: &Encoding, tables: &LegacyStatTables) -> Result<Decoded> {
    match encoding {
        Encoding::Legacy(raw) => legacy::decode(raw, tables),
        Encoding::Template(raw) => template::decode(raw),
    }
}
