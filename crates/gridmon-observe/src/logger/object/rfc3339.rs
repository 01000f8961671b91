use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 timestamp formatter, always UTC.
///
/// Monitor logs are correlated with controller-side logs, which stamp in
/// UTC, so local offsets only add confusion here.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339;

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => {
                write!(w, "{} ", ts)
            }
            Err(_) => {
                write!(w, "<invalid-time> ")
            }
        }
    }
}
