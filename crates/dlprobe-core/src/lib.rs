pub mod config;
pub mod logging;

pub mod checksum;
pub mod fetch;
pub mod filename;
pub mod headers;
pub mod pipeline;
pub mod probe;
pub mod source;
pub mod storage;
pub mod tracking;
