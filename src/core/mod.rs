//! Core data structures and the block deduplication algorithm

pub mod block;
pub mod document;
pub mod filter;
pub mod marker;
pub mod processor;

pub use block::LocationBlock;
pub use document::ConfigDocument;
pub use filter::dedup_blocks;
pub use marker::LocationMarker;
pub use processor::{process_config_file, DedupReport};
