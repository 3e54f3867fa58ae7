pub mod controller;
pub mod submit_flow;

pub use controller::WorkflowController;
pub use submit_flow::SubmitFlow;
