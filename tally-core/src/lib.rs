pub mod config;
pub mod entries;
pub mod entry;
pub mod format;
pub mod parse_entries;
pub mod parse_entry;
pub mod tally;
pub mod units;

pub use config::Config;
pub use entries::ParseResult;
pub use entry::ParsedEntry;
pub use format::format_total_time;
pub use parse_entries::parse_time_entries;
pub use parse_entry::parse_time_entry;
pub use tally::{Tally, TargetProgress};
pub use units::Unit;
