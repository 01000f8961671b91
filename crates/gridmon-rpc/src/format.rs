use std::str::FromStr;

use gridmon_model::{EXIT_ABORTED_BY_USER, FieldKind, Record, TaskState};
use tracing::warn;

const DAY: f64 = 86_400.0;
const HOUR: f64 = 3_600.0;
const MINUTE: f64 = 60.0;

// ============================================================================
// Record / field entry points
// ============================================================================

/// Formats one field of `record` for display.
///
/// An absent field renders as the empty string, never as an error. The field
/// name doubles as the semantic type tag, so callers pass reply tag names
/// straight through.
pub fn format_record_field(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(raw) => format_field(field, raw),
        None => String::new(),
    }
}

/// Formats `raw` according to the semantics of the `field` tag.
///
/// Tags without a recognized semantic type pass the value through unchanged,
/// which keeps the formatter forward compatible with reply fields it has
/// never heard of.
pub fn format_field(field: &str, raw: &str) -> String {
    match FieldKind::from_str(field) {
        Ok(kind) => format_value(kind, raw),
        Err(_) => raw.to_string(),
    }
}

/// Formats `raw` for a known field kind.
pub fn format_value(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::CurrentCpuTime
        | FieldKind::ElapsedTime
        | FieldKind::EstimatedCpuTimeRemaining => duration_string(raw),
        FieldKind::ActiveTaskState => task_state_string(raw),
        FieldKind::ExitStatus => exit_status_string(raw),
        FieldKind::FractionDone => fraction_string(raw),
    }
}

// ============================================================================
// Unit renderers
// ============================================================================

/// Renders a second count (a real number in string form) as a day/hour/
/// minute/second breakdown, e.g. `"90061"` becomes
/// `"1 days 1 hrs 1 mins 1 secs"`. Unit suffixes are always plural.
///
/// The hour and minute gates test the original total rather than the running
/// remainder, so a total just past a unit boundary carries zero-valued lower
/// units: `"3601"` renders as `"1 hrs 0 mins 1 secs"`. Downstream consumers
/// match on these exact strings, so the shape is kept as is.
///
/// Non-numeric input is logged and returned unchanged.
pub fn duration_string(raw: &str) -> String {
    let Ok(total) = raw.trim().parse::<f64>() else {
        warn!("not a number of seconds: {raw:?}");
        return raw.to_string();
    };

    let mut parts = Vec::new();
    let mut consumed = 0.0;

    if total >= DAY {
        let days = (total / DAY).floor() as i64;
        parts.push(format!("{days} days"));
        consumed = days as f64 * DAY;
    }
    if total > HOUR {
        let hrs = ((total - consumed) / HOUR).floor() as i64;
        parts.push(format!("{hrs} hrs"));
        consumed += hrs as f64 * HOUR;
    }
    if total > MINUTE {
        let mins = ((total - consumed) / MINUTE).floor() as i64;
        parts.push(format!("{mins} mins"));
        consumed += mins as f64 * MINUTE;
    }
    if total - consumed > 0.0 {
        let secs = (total - consumed) as i64;
        parts.push(format!("{secs} secs"));
    }

    parts.join(" ")
}

/// Renders the numeric `active_task_state` code as a state name.
///
/// Non-numeric input is returned unchanged.
pub fn task_state_string(raw: &str) -> String {
    match raw.parse::<i64>() {
        Ok(code) => TaskState::from_code(code).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Renders an `exit_status` value as an explanation.
///
/// A trimmed `"0"` means the task is still active and has no exit status
/// yet. A value that parses to zero some other way (`"00"`, `"+0"`) is a
/// real exit code and reads as a finished task.
pub fn exit_status_string(raw: &str) -> String {
    if raw.trim() == "0" {
        return "Active".to_string();
    }

    match raw.parse::<i64>() {
        Ok(0) => "Successful Finish".to_string(),
        Ok(EXIT_ABORTED_BY_USER) => "Aborted by user".to_string(),
        _ => format!("Ended with status of {raw}"),
    }
}

fn fraction_string(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(fraction) => format!("{}%", (fraction * 100.0) as i64),
        Err(_) => raw.to_string(),
    }
}
