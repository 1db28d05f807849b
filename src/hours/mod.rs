pub mod convert;
pub mod parse;

pub use convert::{from_decimal_hours, to_decimal_hours, Hms, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
pub use parse::parse_duration;
