mod kind;
pub use kind::FieldKind;

mod state;
pub use state::TaskState;
