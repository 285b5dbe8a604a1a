mod logs;
mod parse_datetime;

pub use self::logs::init_logger;
pub use self::parse_datetime::{parse_datetime, parse_iso_date};
