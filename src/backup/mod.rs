//! Timestamped backup copies of the target config

mod storage;

pub use storage::create_backup;
