//! The three pipeline stages plus the async driver.
//!
//! All stages are pure functions over explicit inputs; the only state is in
//! [`crate::core::CompressionSession`].

mod compressor;
pub mod encoder;
pub mod estimator;
pub mod loader;

pub use compressor::Compressor;
pub use encoder::encode;
pub use estimator::{estimate_reduction, BADGE_THRESHOLD_PERCENT};
pub use loader::load;
