pub mod preview_client;
pub mod processing_client;

pub use preview_client::PreviewClient;
pub use processing_client::ProcessingClient;
