use std::fmt;

use crate::{MmvError, WORD_BITS};

/// Smallest supported lane width: `p = 3`.
pub const MIN_LANE_BITS: u32 = 2;

/// Largest supported lane width: `p = 2^32 - 1`.
pub const MAX_LANE_BITS: u32 = 32;

/// Bit geometry of a packed vector modulo `p = 2^k - 1`.
///
/// A lane holds a value in `[0, p]` on `k = lane_width()` bits, inside a field
/// of `field_width()` bits (the next power of two). Lanes are numbered from the
/// least significant field of a word upwards.
///
/// The masks drive the branch-free kernels of [`crate::reference::word`]:
///
/// | mask          | bits set                                           |
/// |---------------|----------------------------------------------------|
/// | `low_mask`    | bit 0 of every field                               |
/// | `value_mask`  | the `k` value bits of every field                  |
/// | `plane_mask`  | the `k` value bits of every even field             |
/// | `guard_mask`  | bit `k` of every even field (carry inside a plane) |
/// | `check_mask`  | bits `0..k-1` of every field (equality fold)       |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaneLayout {
    modulus: u32,
    lane_bits: u32,
    field_bits: u32,
    lanes_per_word: usize,
    low_mask: u64,
    value_mask: u64,
    plane_mask: u64,
    guard_mask: u64,
    check_mask: u64,
}

/// Repeats `pattern` every `stride` bits, starting at bit 0.
const fn broadcast(pattern: u64, stride: u32) -> u64 {
    let mut word: u64 = 0;
    let mut shift: u32 = 0;
    while shift < WORD_BITS {
        word |= pattern << shift;
        shift += stride;
    }
    word
}

impl LaneLayout {
    /// Derives the layout of modulus `p`.
    ///
    /// # Errors
    ///
    /// [`MmvError::Configuration`] unless `p = 2^k - 1` with
    /// `MIN_LANE_BITS <= k <= MAX_LANE_BITS`.
    pub fn new(modulus: u32) -> Result<Self, MmvError> {
        let order: u64 = modulus as u64 + 1;

        if !order.is_power_of_two() {
            return Err(MmvError::Configuration {
                modulus,
                reason: "modulus must be of the form 2^k - 1",
            });
        }

        let lane_bits: u32 = order.trailing_zeros();

        if !(MIN_LANE_BITS..=MAX_LANE_BITS).contains(&lane_bits) {
            return Err(MmvError::Configuration {
                modulus,
                reason: "lane width must be between 2 and 32 bits",
            });
        }

        let field_bits: u32 = lane_bits.next_power_of_two();
        let lanes_per_word: usize = (WORD_BITS / field_bits) as usize;

        // Kernels work on an even and an odd plane of lanes.
        if lanes_per_word < 2 || lane_bits as usize * lanes_per_word > WORD_BITS as usize {
            return Err(MmvError::Configuration {
                modulus,
                reason: "a machine word must hold at least two lanes",
            });
        }

        let value: u64 = (1u64 << lane_bits) - 1;

        Ok(Self {
            modulus,
            lane_bits,
            field_bits,
            lanes_per_word,
            low_mask: broadcast(1, field_bits),
            value_mask: broadcast(value, field_bits),
            plane_mask: broadcast(value, 2 * field_bits),
            guard_mask: broadcast(1 << lane_bits, 2 * field_bits),
            check_mask: broadcast(value >> 1, field_bits),
        })
    }

    /// Returns the modulus `p`.
    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Returns the number of value bits `k` of a lane.
    #[inline]
    pub fn lane_width(&self) -> u32 {
        self.lane_bits
    }

    /// Returns the number of bits between the starts of two adjacent lanes.
    #[inline]
    pub fn field_width(&self) -> u32 {
        self.field_bits
    }

    #[inline]
    pub fn lanes_per_word(&self) -> usize {
        self.lanes_per_word
    }

    #[inline]
    pub fn low_mask(&self) -> u64 {
        self.low_mask
    }

    #[inline]
    pub fn value_mask(&self) -> u64 {
        self.value_mask
    }

    #[inline]
    pub fn plane_mask(&self) -> u64 {
        self.plane_mask
    }

    #[inline]
    pub fn guard_mask(&self) -> u64 {
        self.guard_mask
    }

    #[inline]
    pub fn check_mask(&self) -> u64 {
        self.check_mask
    }

    /// Bit 0 of every even field.
    #[inline]
    pub fn plane_low_mask(&self) -> u64 {
        self.guard_mask >> self.lane_bits
    }

    /// Returns the number of words holding `dimension` lanes.
    #[inline]
    pub fn word_count(&self, dimension: usize) -> usize {
        dimension.div_ceil(self.lanes_per_word)
    }

    /// Returns the word index and the bit offset of lane `index`.
    #[inline]
    pub fn lane_position(&self, index: usize) -> (usize, u32) {
        (
            index / self.lanes_per_word,
            (index % self.lanes_per_word) as u32 * self.field_bits,
        )
    }
}

impl fmt::Display for LaneLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LaneLayout(p={}, lane={}b, field={}b, lanes/word={})",
            self.modulus, self.lane_bits, self.field_bits, self.lanes_per_word
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MMV_ENTRIES, SUPPORTED_MODULI};

    #[test]
    fn layout_mod3() {
        let layout: LaneLayout = LaneLayout::new(3).unwrap();
        assert_eq!(layout.lane_width(), 2);
        assert_eq!(layout.field_width(), 2);
        assert_eq!(layout.lanes_per_word(), 32);
        assert_eq!(layout.value_mask(), u64::MAX);
        assert_eq!(layout.low_mask(), 0x5555_5555_5555_5555);
        assert_eq!(layout.plane_mask(), 0x3333_3333_3333_3333);
        assert_eq!(layout.guard_mask(), 0x4444_4444_4444_4444);
        assert_eq!(layout.check_mask(), 0x5555_5555_5555_5555);
    }

    #[test]
    fn layout_mod15() {
        let layout: LaneLayout = LaneLayout::new(15).unwrap();
        assert_eq!(layout.lane_width(), 4);
        assert_eq!(layout.lanes_per_word(), 16);
        assert_eq!(layout.value_mask(), u64::MAX);
        assert_eq!(layout.plane_mask(), 0x0f0f_0f0f_0f0f_0f0f);
        assert_eq!(layout.guard_mask(), 0x1010_1010_1010_1010);
        assert_eq!(layout.check_mask(), 0x7777_7777_7777_7777);
    }

    #[test]
    fn layout_mod31() {
        let layout: LaneLayout = LaneLayout::new(31).unwrap();
        assert_eq!(layout.lane_width(), 5);
        assert_eq!(layout.field_width(), 8);
        assert_eq!(layout.lanes_per_word(), 8);
        assert_eq!(layout.value_mask(), 0x1f1f_1f1f_1f1f_1f1f);
        assert_eq!(layout.plane_mask(), 0x001f_001f_001f_001f);
        assert_eq!(layout.guard_mask(), 0x0020_0020_0020_0020);
        assert_eq!(layout.plane_low_mask(), 0x0001_0001_0001_0001);
        assert_eq!(layout.check_mask(), 0x0f0f_0f0f_0f0f_0f0f);
    }

    #[test]
    fn layout_widest_lane() {
        let layout: LaneLayout = LaneLayout::new(u32::MAX).unwrap();
        assert_eq!(layout.lane_width(), 32);
        assert_eq!(layout.lanes_per_word(), 2);
        assert_eq!(layout.plane_mask(), 0x0000_0000_ffff_ffff);
        assert_eq!(layout.guard_mask(), 0x0000_0001_0000_0000);
    }

    #[test]
    fn layout_rejects_unsupported_moduli() {
        for p in [0u32, 1, 2, 5, 17, 30, 100, 1 << 31] {
            assert!(
                matches!(LaneLayout::new(p), Err(MmvError::Configuration { modulus, .. }) if modulus == p),
                "p={p} accepted"
            );
        }
    }

    #[test]
    fn layout_word_count_padded_entries() {
        assert_eq!(LaneLayout::new(3).unwrap().word_count(MMV_ENTRIES), 7734);
        assert_eq!(LaneLayout::new(15).unwrap().word_count(MMV_ENTRIES), 15468);
        assert_eq!(LaneLayout::new(31).unwrap().word_count(MMV_ENTRIES), 30936);
    }

    #[test]
    fn layout_word_count_rounds_up() {
        let layout: LaneLayout = LaneLayout::new(7).unwrap();
        assert_eq!(layout.lanes_per_word(), 16);
        assert_eq!(layout.word_count(1), 1);
        assert_eq!(layout.word_count(16), 1);
        assert_eq!(layout.word_count(17), 2);
        assert_eq!(layout.lane_position(17), (1, 4));
    }

    #[test]
    fn layout_masks_are_disjoint_per_lane() {
        for p in SUPPORTED_MODULI {
            let layout: LaneLayout = LaneLayout::new(p).unwrap();
            assert_eq!(layout.plane_mask() & layout.guard_mask(), 0, "{layout}");
            assert_eq!(layout.check_mask() & !layout.value_mask(), 0, "{layout}");
            assert_eq!(layout.plane_mask() & !layout.value_mask(), 0, "{layout}");
            // Odd lanes shifted onto the even plane cover the remaining value bits.
            assert_eq!(
                layout.plane_mask() | (layout.plane_mask() << layout.field_width()),
                layout.value_mask(),
                "{layout}"
            );
            assert_eq!(layout.low_mask().count_ones() as usize, layout.lanes_per_word());
        }
    }
}
