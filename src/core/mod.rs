//! Core abstractions shared by every stage of the pipeline
//!
//! - `error`: structured error type and result alias

pub mod error;

pub use error::{EmotionError, Result, WorkKind};
