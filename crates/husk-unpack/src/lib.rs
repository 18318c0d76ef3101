//! Archive unpacking through external decompression tools.
//!
//! # Architecture
//!
//! - `format.rs` - Container format model and filename detection
//! - `request.rs` - Extraction request and outcome types
//! - `tool.rs` - External tool configuration and lookup
//! - `dest.rs` - Destination directory lifecycle
//! - `extract/` - Invocation planning and subprocess execution

pub use error::{Error, Result};
pub use extract::{ExtractionPlan, ToolInvocation, extract, extract_with};
pub use format::{ArchiveFormat, Compression, strip_archive_suffix};
pub use request::{ExtractionOutcome, ExtractionRequest};
pub use tool::Toolchain;

mod dest;
mod error;
pub mod extract;
mod format;
mod request;
mod tool;
