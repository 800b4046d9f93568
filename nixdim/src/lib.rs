//! Axis descriptions for multidimensional data arrays.
//!
//! A data array has one dimension per axis. Each dimension is one of three kinds: sampled
//! (uniform spacing), range (explicit ascending ticks) or set (categorical labels). Dimensions
//! keep all of their state in a `Store` node and translate between positions along the axis and
//! integer indices.
//!
pub mod attrs;
mod dimension;
mod errors;
mod memory;
mod range;
mod sampled;
mod set;
mod store;

#[cfg(test)]
mod testing;

pub use dimension::Dimension;
pub use dimension::DimensionBase;
pub use dimension::DimensionType;
pub use errors::Error;
pub use errors::Result;
pub use memory::MemoryStore;
pub use range::RangeDimension;
pub use sampled::SampledDimension;
pub use set::SetDimension;
pub use store::Data;
pub use store::ElementType;
pub use store::Store;
pub use store::Value;
