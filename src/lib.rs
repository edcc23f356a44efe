pub mod decode;
pub mod describe;
mod error;
pub mod tables;
pub mod timedef;
pub mod units;

pub use error::{Error, Result};
