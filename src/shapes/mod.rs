//! Shape Catalog
//!
//! Named slot patterns (borders, rows, columns, circles, small centred groups)
//! resolved to concrete slot indices for a given menu size.
//! Lookup goes through an explicit `(Shape, rows)` map, built once.

pub mod sized_shape;

pub use sized_shape::{SizedShape, UNSUPPORTED_SLOTS};

use crate::error::{MenuError, MenuResult};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Slots per row
pub const ROW_WIDTH: usize = 9;
/// Tallest grid the catalog has variants for
pub const MAX_ROWS: usize = 6;
/// Slot count of the tallest grid
pub const MAX_SLOTS: usize = ROW_WIDTH * MAX_ROWS;

/// Geometric slot pattern families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Bounds,
    Circle,
    Columns,
    Rows,
    SixSlots,
    TwoSlots,
    OneSlot,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Bounds,
        Shape::Circle,
        Shape::Columns,
        Shape::Rows,
        Shape::SixSlots,
        Shape::TwoSlots,
        Shape::OneSlot,
    ];

    /// Variants per row count, `None` where the shape has no layout
    fn variants(self) -> [SizedShape; MAX_ROWS] {
        use SizedShape::*;
        match self {
            Shape::Bounds => [None, None, Bounds3, Bounds4, Bounds5, Bounds6],
            Shape::Circle => [None, None, None, None, Circle5, Circle6],
            Shape::Columns => [Columns1, Columns2, Columns3, Columns4, Columns5, Columns6],
            Shape::Rows => [None, None, Rows3, Rows4, Rows5, Rows6],
            Shape::SixSlots => [None, SixSlots2, None, SixSlots4, None, SixSlots6],
            Shape::TwoSlots => [TwoSlots1, TwoSlots2, TwoSlots3, TwoSlots4, TwoSlots5, TwoSlots6],
            Shape::OneSlot => [OneSlot1, OneSlot2, OneSlot3, OneSlot4, OneSlot5, OneSlot6],
        }
    }
}

lazy_static! {
    static ref CATALOG: FxHashMap<(Shape, usize), SizedShape> = build_catalog();
}

fn build_catalog() -> FxHashMap<(Shape, usize), SizedShape> {
    let mut catalog = FxHashMap::default();
    for shape in Shape::ALL {
        for (index, sized) in shape.variants().into_iter().enumerate() {
            if sized.is_supported() {
                catalog.insert((shape, index + 1), sized);
            }
        }
    }
    log::debug!("[ShapeCatalog] Built catalog with {} sized shapes", catalog.len());
    catalog
}

/// Number of rows in a grid of `size` slots
pub fn rows_for_size(size: usize) -> MenuResult<usize> {
    if size > 0 && size % ROW_WIDTH == 0 {
        Ok(size / ROW_WIDTH)
    } else {
        Err(MenuError::InvalidSize { size })
    }
}

/// Check that a host grid of `size` slots can be allocated
pub fn validate_menu_size(size: usize) -> MenuResult<()> {
    let rows = rows_for_size(size)?;
    if rows > MAX_ROWS {
        return Err(MenuError::InvalidSize { size });
    }
    Ok(())
}

/// Resolve `shape` for a menu of `size` slots.
///
/// Sizes that are not a positive multiple of 9 are an error. A valid size the
/// shape has no layout for resolves to [`SizedShape::None`], which callers
/// are expected to filter out.
pub fn resolve(shape: Shape, size: usize) -> MenuResult<SizedShape> {
    let rows = rows_for_size(size)?;
    Ok(CATALOG
        .get(&(shape, rows))
        .copied()
        .unwrap_or(SizedShape::None))
}
