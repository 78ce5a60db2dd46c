pub mod log;
pub mod metrics;

pub use log::ValidationLog;
pub use metrics::SubmitMetrics;
