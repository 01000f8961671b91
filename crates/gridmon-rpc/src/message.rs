use gridmon_model::Record;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// Renders a message record as a single display line.
///
/// Messages carry up to three fields: `project`, `time` (epoch seconds) and
/// `body`. A present project or timestamp opens a `[...]` prefix ahead of
/// the body. A timestamp that fails to parse is logged and dropped while the
/// rest of the line still renders, garbled telemetry should degrade rather
/// than disappear.
pub fn render_message(msg: &Record) -> String {
    let project = msg.get("project");
    let time = msg.get("time");

    let has_project = project.is_some_and(|p| !p.is_empty());
    let has_time = time.is_some();

    let mut out = String::new();
    if has_project || has_time {
        out.push('[');
        if let Some(project) = project {
            out.push_str(project);
        }
        if has_project && has_time {
            out.push(' ');
        }
        if let Some(raw) = time {
            match timestamp_string(raw) {
                Some(stamp) => out.push_str(&stamp),
                None => debug!("unparsable message timestamp: {raw:?}"),
            }
        }
        out.push_str("] ");
    }

    if let Some(body) = msg.get("body") {
        out.push_str(body);
    }

    out
}

/// RFC 3339 rendering of an epoch-seconds string, UTC.
///
/// Accepts fractional second counts and truncates them, clients send
/// timestamps like `1352300400.000000`. Non-finite values are dropped like
/// any other garbled timestamp, the saturating cast would land a `NaN` on
/// the epoch.
fn timestamp_string(raw: &str) -> Option<String> {
    let seconds = raw.trim().parse::<f64>().ok()?;
    if !seconds.is_finite() {
        return None;
    }
    let stamp = OffsetDateTime::from_unix_timestamp(seconds as i64).ok()?;
    stamp.format(&Rfc3339).ok()
}
