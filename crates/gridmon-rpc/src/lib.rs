pub mod auth;
pub mod error;
pub mod extract;
pub mod format;
pub mod message;
pub mod resolve;
pub mod result;

pub mod prelude {
    pub use crate::auth::{auth_digest, digest_hex};
    pub use crate::error::{ExtractError, RpcResult};
    pub use crate::extract::{records, try_records};
    pub use crate::format::{duration_string, exit_status_string, task_state_string};
    pub use crate::format::{format_field, format_record_field, format_value};
    pub use crate::message::render_message;
    pub use crate::resolve::resolve_addr;
    pub use crate::result::ResultRecord;
}

#[cfg(test)]
mod tests {
    use gridmon_model::{FieldKind, Record};

    use super::prelude::*;

    #[test]
    fn prelude_carries_the_formatting_entry_points() {
        let record: Record = [("fraction_done", "0.5")].into_iter().collect();

        assert_eq!(format_record_field(&record, "fraction_done"), "50%");
        assert_eq!(format_field("exit_status", "-197"), "Aborted by user");
        assert_eq!(format_value(FieldKind::ActiveTaskState, "1"), "Running");
    }
}
