mod errors;
mod pipeline;
mod summary;
mod transformer;

pub use errors::PipelineError;
pub use pipeline::Pipeline;
pub use summary::RunSummary;
pub use transformer::{RecordOutcome, RecordTransformer};
