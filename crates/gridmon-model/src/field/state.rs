use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheduler state of an active task, decoded from the numeric
/// `active_task_state` reply field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    Running,
    Suspended,
    Unknown,
}

impl TaskState {
    /// Maps the wire code onto a state.
    ///
    /// Code 1 is the executing state. Codes 0, 2 and 9 all mean the task
    /// exists but is not being scheduled right now. Anything else is
    /// reported as unknown rather than rejected.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => TaskState::Running,
            0 | 2 | 9 => TaskState::Suspended,
            _ => TaskState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Running => "Running",
            TaskState::Suspended => "Suspended",
            TaskState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskState;

    #[test]
    fn decodes_known_codes() {
        let cases = [
            (0, TaskState::Suspended),
            (1, TaskState::Running),
            (2, TaskState::Suspended),
            (9, TaskState::Suspended),
        ];
        for (code, expected) in cases {
            assert_eq!(TaskState::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn unlisted_codes_are_unknown() {
        for code in [-1, 3, 4, 8, 10, 100] {
            assert_eq!(TaskState::from_code(code), TaskState::Unknown, "code {code}");
        }
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(TaskState::Running.to_string(), "Running");
        assert_eq!(TaskState::Suspended.to_string(), "Suspended");
        assert_eq!(TaskState::Unknown.to_string(), "Unknown");
    }
}
