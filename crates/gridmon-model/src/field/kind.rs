use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Semantic type tag of a result field.
///
/// Drives display formatting only: extraction always hands values over
/// as verbatim strings, and it is up to the formatter to decide whether a
/// tag is recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    FractionDone,
    ElapsedTime,
    CurrentCpuTime,
    EstimatedCpuTimeRemaining,
    ExitStatus,
    ActiveTaskState,
}

impl FieldKind {
    /// Every recognized kind, in canonical order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::FractionDone,
        FieldKind::ElapsedTime,
        FieldKind::CurrentCpuTime,
        FieldKind::EstimatedCpuTimeRemaining,
        FieldKind::ExitStatus,
        FieldKind::ActiveTaskState,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::FractionDone => "fraction_done",
            FieldKind::ElapsedTime => "elapsed_time",
            FieldKind::CurrentCpuTime => "current_cpu_time",
            FieldKind::EstimatedCpuTimeRemaining => "estimated_cpu_time_remaining",
            FieldKind::ExitStatus => "exit_status",
            FieldKind::ActiveTaskState => "active_task_state",
        }
    }
}

impl FromStr for FieldKind {
    type Err = ModelError;

    /// Exact tag match. Reply tags are wire-defined and case-sensitive,
    /// so no trimming or case folding happens here.
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "fraction_done" => Ok(FieldKind::FractionDone),
            "elapsed_time" => Ok(FieldKind::ElapsedTime),
            "current_cpu_time" => Ok(FieldKind::CurrentCpuTime),
            "estimated_cpu_time_remaining" => Ok(FieldKind::EstimatedCpuTimeRemaining),
            "exit_status" => Ok(FieldKind::ExitStatus),
            "active_task_state" => Ok(FieldKind::ActiveTaskState),
            other => Err(ModelError::UnknownFieldKind(other.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::FieldKind;
    use crate::error::ModelError;

    #[test]
    fn parses_every_canonical_tag() {
        for kind in FieldKind::ALL {
            let parsed = FieldKind::from_str(kind.as_str());
            assert_eq!(parsed.unwrap(), kind, "tag {kind} must parse to itself");
        }
    }

    #[test]
    fn display_matches_wire_tag() {
        assert_eq!(FieldKind::FractionDone.to_string(), "fraction_done");
        assert_eq!(
            FieldKind::EstimatedCpuTimeRemaining.to_string(),
            "estimated_cpu_time_remaining"
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        let bad = ["", "name", "project_url", "cpu_time", "fractiondone"];
        for tag in bad {
            assert!(
                FieldKind::from_str(tag).is_err(),
                "expected error for unrecognized tag {tag:?}"
            );
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        for tag in ["Fraction_Done", "FRACTION_DONE", " fraction_done"] {
            let parsed = FieldKind::from_str(tag);
            assert!(
                matches!(parsed, Err(ModelError::UnknownFieldKind(_))),
                "tag {tag:?} must not match"
            );
        }
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&FieldKind::ActiveTaskState).unwrap();
        assert_eq!(json, r#""active_task_state""#);

        let back: FieldKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FieldKind::ActiveTaskState);
    }
}
