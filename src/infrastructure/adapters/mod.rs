//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod acedata;
pub mod fake;

pub use acedata::*;
pub use fake::*;
