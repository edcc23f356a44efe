use crate::units::TimeUnit;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("IncompatibleUnits({0}, {1})")]
    IncompatibleUnits(TimeUnit, TimeUnit),

    #[error("UnreconcilableUnits({0}, {1})")]
    UnreconcilableUnits(TimeUnit, TimeUnit),

    #[error("InvalidPeriod: P1 `{p1}` > P2 `{p2}`")]
    InvalidPeriod { p1: u8, p2: u8 },

    #[error("UnknownLegacyParameter: parameter `{parameter}` of table `{table_version}`")]
    UnknownLegacyParameter { table_version: u8, parameter: u8 },

    #[error("Time Range Unit `{0}` does not exist")]
    UnknownUnitCode(u8),
}
