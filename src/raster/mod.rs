//! Discrete circle rasterization and row-extent precomputation.

mod circle;
mod extents;

pub use circle::{rasterize, Offset};
pub use extents::{ClearanceShape, Extent, RowExtentCache, RowExtents, RowSpan};
