mod constants;
pub use constants::{DEFAULT_HOSTNAME, DEFAULT_RPC_PORT, EXIT_ABORTED_BY_USER};
pub use constants::{RESULT_FIELDS, RESULT_TOP_TAG};

mod filter;
pub use filter::FieldFilter;

mod host;
pub use host::{HostEndpoint, ResolvedAddr};

mod record;
pub use record::Record;
