pub mod error;
pub mod level;
pub mod math;
pub mod selection;
pub mod topology;

pub use error::{DotloopError, Result};
