mod config;
pub use config::GridConfig;

mod domain;
pub use domain::{DEFAULT_HOSTNAME, DEFAULT_RPC_PORT, EXIT_ABORTED_BY_USER};
pub use domain::{FieldFilter, HostEndpoint, Record, ResolvedAddr};
pub use domain::{RESULT_FIELDS, RESULT_TOP_TAG};

mod error;
pub use error::{ModelError, ModelResult};

mod field;
pub use field::{FieldKind, TaskState};
