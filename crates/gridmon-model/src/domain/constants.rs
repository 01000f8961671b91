//! Well-known grid protocol constants.
//!
//! Wire-level values shared between the reply mapper, the formatter and
//! the collaborators that drive them. Keeping them here avoids scattering
//! magic strings throughout the codebase.

/// TCP port a grid client listens on for GUI-RPC connections when the
/// deployment does not override it.
///
/// Stored as a string because endpoints keep the port exactly as the user
/// typed it; [`crate::HostEndpoint::render`] substitutes this value when
/// the field was left empty.
pub const DEFAULT_RPC_PORT: &str = "31416";

/// Hostname assumed for a freshly configured endpoint.
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";

/// Top-level tag wrapping one task result inside a `get_results` reply.
pub const RESULT_TOP_TAG: &str = "result";

/// The result fields the monitor actually displays.
///
/// `gridmon_rpc`'s result parser restricts extraction to this set; every
/// other child of a `result` element is dropped on the floor.
pub const RESULT_FIELDS: [&str; 7] = [
    "name",
    "estimated_cpu_time_remaining",
    "project_url",
    "fraction_done",
    "current_cpu_time",
    "active_task_state",
    "exit_status",
];

/// Exit code a client reports for a task the user aborted.
pub const EXIT_ABORTED_BY_USER: i64 = -197;
