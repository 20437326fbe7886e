pub mod config;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod fit;
pub mod linear;
pub mod metrics;
pub mod plots;

pub use dataset::{generate_cubic, CubicConfig, Dataset};
pub use error::{Error, Result};
pub use linear::LinearModel;
