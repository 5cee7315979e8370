mod extraction;
mod reporter;

pub use extraction::{ExtractionReport, format_offset};
pub use reporter::{NoopReporter, ScanReporter, TracingReporter};

pub(crate) use extraction::serialize_hex;
