pub mod assembler;
pub mod selection;

pub use assembler::{assemble, assemble_by_id, endpoint_for, RequestPayload};
pub use selection::FileSelection;
