pub mod codes;
mod record_type;

pub use codes::{class_name, opcode_name, rcode_name};
pub use record_type::RecordType;
