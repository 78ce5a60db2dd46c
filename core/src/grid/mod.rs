pub mod dimension;
pub mod model;

pub use dimension::{Axis, DimensionModel};
pub use model::GridModel;
