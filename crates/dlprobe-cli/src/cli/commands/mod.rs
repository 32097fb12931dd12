//! CLI command handlers, one file per command.

mod checksum;
mod fetch;
mod name;
mod probe;
mod report;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use name::run_name;
pub use probe::run_probe;
