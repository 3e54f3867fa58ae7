pub mod file;
pub mod operation;
pub mod outcome;
pub mod preview;

pub use file::SelectedFile;
pub use operation::{Operation, OperationDescriptor, QualityLevel};
pub use outcome::ProcessOutcome;
pub use preview::{PagePreview, PreviewMode, PreviewResponse};
