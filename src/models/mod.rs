pub mod record;
pub mod record_kind;

pub use record::Record;
pub use record_kind::RecordKind;
