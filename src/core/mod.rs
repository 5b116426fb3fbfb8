//! AIIAC 核心组件模块
//!
//! Generator dispatch, the text-generation seam and the result record.

pub mod components;
pub mod container;
pub mod error;
pub mod generator;
pub mod models;
pub mod stages;

// Re-export core types
pub use components::*;
pub use container::*;
pub use error::*;
pub use generator::*;
pub use models::*;
pub use stages::extract_stages;
