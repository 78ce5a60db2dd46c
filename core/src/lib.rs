//! Matrix-entry model and rational-token core for the QSolve calculator.
//!
//! The modules carry the input layer of the calculator: dimension steppers
//! with clamp-on-read validation, the 2-D cell grid behind each entry widget,
//! the rational token pipeline, and the session-scoped snapshot store.

pub mod grid;
pub mod math;
pub mod prelude;
pub mod session;
pub mod telemetry;

pub use prelude::{EntryError, EntryResult, SetupError};
