//! Concrete slot lists for every (shape, row count) variant.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::MAX_SLOTS;

/// Slot list returned for unsupported shape/size pairs
pub const UNSUPPORTED_SLOTS: [i32; 1] = [-1];

/// Interior of a six-row grid. `Bounds6` is everything else.
#[rustfmt::skip]
const BOUNDS_6_EXCLUDED: [i32; 28] = [
    10, 11, 12, 13, 14, 15, 16,
    19, 20, 21, 22, 23, 24, 25,
    28, 29, 30, 31, 32, 33, 34,
    37, 38, 39, 40, 41, 42, 43,
];

lazy_static! {
    static ref BOUNDS_6_SLOTS: Vec<i32> = complement(&BOUNDS_6_EXCLUDED);
}

/// Every index of the largest grid that is not in `excluded`
fn complement(excluded: &[i32]) -> Vec<i32> {
    (0..MAX_SLOTS as i32)
        .filter(|slot| !excluded.contains(slot))
        .collect()
}

/// A shape resolved for one specific grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizedShape {
    Bounds3,
    Bounds4,
    Bounds5,
    Bounds6,
    Circle5,
    Circle6,
    Rows3,
    Rows4,
    Rows5,
    Rows6,
    Columns1,
    Columns2,
    Columns3,
    Columns4,
    Columns5,
    Columns6,
    SixSlots2,
    SixSlots4,
    SixSlots6,
    TwoSlots1,
    TwoSlots2,
    TwoSlots3,
    TwoSlots4,
    TwoSlots5,
    TwoSlots6,
    OneSlot1,
    OneSlot2,
    OneSlot3,
    OneSlot4,
    OneSlot5,
    OneSlot6,
    /// No variant exists for the requested size
    None,
}

impl SizedShape {
    /// Raw slot indices. `SizedShape::None` yields `[-1]`.
    pub fn slots(&self) -> &'static [i32] {
        use SizedShape::*;
        match self {
            Bounds3 => &[10, 11, 12, 13, 14, 15, 16],
            Bounds4 => &[10, 11, 12, 13, 14, 15, 16, 19, 20, 21, 22, 23, 24, 25],
            Bounds5 => &[
                10, 11, 12, 13, 14, 15, 16, 19, 20, 21, 22, 23, 24, 25, 28, 29, 30, 31, 32, 33, 34,
            ],
            Bounds6 => BOUNDS_6_SLOTS.as_slice(),
            Circle5 => &[11, 12, 13, 14, 15, 19, 20, 21, 22, 23, 24, 25, 29, 30, 31, 32, 33],
            Circle6 => &[12, 13, 14, 20, 21, 22, 23, 24, 29, 30, 31, 32, 33, 39, 40, 41],
            Rows3 => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 18, 19, 20, 21, 22, 23, 24, 25, 26],
            Rows4 => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 27, 28, 29, 30, 31, 32, 33, 34, 35],
            Rows5 => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 36, 37, 38, 39, 40, 41, 42, 43, 44],
            Rows6 => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 45, 46, 47, 48, 49, 50, 51, 52, 53],
            Columns1 => &[0, 8],
            Columns2 => &[0, 8, 9, 17],
            Columns3 => &[0, 8, 9, 17, 18, 26],
            Columns4 => &[0, 8, 9, 17, 18, 26, 27, 35],
            Columns5 => &[0, 8, 9, 17, 18, 26, 27, 35, 36, 44],
            Columns6 => &[0, 8, 9, 17, 18, 26, 27, 35, 36, 44, 45, 53],
            SixSlots2 => &[3, 4, 5, 12, 13, 14],
            SixSlots4 => &[12, 13, 14, 21, 22, 23],
            SixSlots6 => &[21, 22, 23, 30, 31, 32],
            TwoSlots1 => &[3, 5],
            TwoSlots2 => &[4, 13],
            TwoSlots3 => &[12, 14],
            TwoSlots4 => &[13, 22],
            TwoSlots5 => &[21, 23],
            TwoSlots6 => &[22, 31],
            OneSlot1 | OneSlot2 => &[4],
            OneSlot3 | OneSlot4 => &[13],
            OneSlot5 | OneSlot6 => &[22],
            None => &UNSUPPORTED_SLOTS,
        }
    }

    /// Slots the shape excludes, for shapes defined by exclusion
    pub fn excluded_slots(&self) -> Option<&'static [i32]> {
        match self {
            SizedShape::Bounds6 => Some(&BOUNDS_6_EXCLUDED),
            _ => Option::None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, SizedShape::None)
    }

    /// Slot indices with the unsupported sentinel filtered out
    pub fn usable_slots(&self) -> impl Iterator<Item = usize> {
        self.slots()
            .iter()
            .filter(|slot| **slot >= 0)
            .map(|slot| *slot as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounds_6_complement() {
        let slots: HashSet<i32> = SizedShape::Bounds6.slots().iter().copied().collect();
        let excluded: HashSet<i32> = SizedShape::Bounds6
            .excluded_slots()
            .expect("Bounds6 is defined by exclusion")
            .iter()
            .copied()
            .collect();

        assert!(slots.is_disjoint(&excluded));

        let union: HashSet<i32> = slots.union(&excluded).copied().collect();
        let full: HashSet<i32> = (0..MAX_SLOTS as i32).collect();
        assert_eq!(union, full);
    }

    #[test]
    fn test_bounds_6_is_the_border() {
        assert_eq!(
            SizedShape::Bounds6.slots(),
            &[
                0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 17, 18, 26, 27, 35, 36, 44, 45, 46, 47, 48, 49, 50,
                51, 52, 53
            ]
        );
    }

    #[test]
    fn test_none_sentinel() {
        assert_eq!(SizedShape::None.slots(), &[-1]);
        assert!(!SizedShape::None.is_supported());
        assert_eq!(SizedShape::None.usable_slots().count(), 0);
    }

    #[test]
    fn test_usable_slots_keep_order() {
        let slots: Vec<usize> = SizedShape::TwoSlots3.usable_slots().collect();
        assert_eq!(slots, vec![12, 14]);
    }
}
