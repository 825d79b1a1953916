// crates/shared-kernel/src/value_objects/mod.rs
pub mod bounds;
pub mod counts;

pub use bounds::ValueBounds;
pub use counts::ValueCount;
