use std::hash::{DefaultHasher, Hasher};

use crate::{
    MmvError,
    layouts::{Data, DataMut, DataRef, LaneLayout},
    source::Source,
};

/// A vector of `dimension` integers modulo `p`, packed into `u64` words
/// through a [`LaneLayout`].
///
/// The type parameter `D` controls ownership: `Vec<u64>` for owned,
/// `&[u64]` for shared borrows, `&mut [u64]` for mutable borrows.
/// The layout is fixed for the lifetime of the vector.
///
/// Lane accessors are reference helpers for tests and debugging; the
/// arithmetic of [`crate::api`] works on whole words of [`PackedVec::raw`].
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct PackedVec<D: Data> {
    data: D,
    layout: LaneLayout,
    dimension: usize,
}

impl PackedVec<Vec<u64>> {
    /// Allocates a zero-initialized vector of `layout.word_count(dimension)` words.
    pub fn alloc(layout: &LaneLayout, dimension: usize) -> Self {
        Self {
            data: vec![0u64; layout.word_count(dimension)],
            layout: *layout,
            dimension,
        }
    }

    /// Packs `lanes` into a new vector of dimension `lanes.len()`.
    pub fn from_lanes(layout: &LaneLayout, lanes: &[u32]) -> Self {
        let mut vec: Self = Self::alloc(layout, lanes.len());
        lanes
            .iter()
            .enumerate()
            .for_each(|(i, x)| vec.insert(i, *x));
        vec
    }
}

impl<D: DataRef> PackedVec<D> {
    /// Wraps an existing word buffer.
    ///
    /// # Errors
    ///
    /// [`MmvError::LengthMismatch`] if `data` does not hold exactly
    /// `layout.word_count(dimension)` words.
    pub fn from_data(data: D, layout: &LaneLayout, dimension: usize) -> Result<Self, MmvError> {
        MmvError::check_len("data", layout.word_count(dimension), data.as_ref().len())?;
        Ok(Self {
            data,
            layout: *layout,
            dimension,
        })
    }

    pub fn layout(&self) -> &LaneLayout {
        &self.layout
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn word_count(&self) -> usize {
        self.data.as_ref().len()
    }

    /// Returns the packed words.
    pub fn raw(&self) -> &[u64] {
        self.data.as_ref()
    }

    /// Returns lane `index`, a value in `[0, p]`.
    ///
    /// # Errors
    ///
    /// [`MmvError::Index`] if `index >= dimension`.
    pub fn lane_get(&self, index: usize) -> Result<u32, MmvError> {
        self.check_index(index)?;
        Ok(self.extract(index))
    }

    /// Unpacks every lane.
    pub fn to_lanes(&self) -> Vec<u32> {
        (0..self.dimension).map(|i| self.extract(i)).collect()
    }

    /// Returns `true` if no bit is set outside the value field of a lane
    /// below `dimension`.
    pub fn is_well_formed(&self) -> bool {
        let lanes_per_word: usize = self.layout.lanes_per_word();
        self.raw().iter().enumerate().all(|(i, word)| {
            let used: usize = self
                .dimension
                .saturating_sub(i * lanes_per_word)
                .min(lanes_per_word);
            let live: u64 = if used == lanes_per_word {
                u64::MAX
            } else {
                (1u64 << (used as u32 * self.layout.field_width())) - 1
            };
            word & !(self.layout.value_mask() & live) == 0
        })
    }

    pub fn digest_u64(&self) -> u64 {
        let mut h: DefaultHasher = DefaultHasher::new();
        self.raw().iter().for_each(|x| h.write_u64(*x));
        h.write_u32(self.layout.modulus());
        h.write_usize(self.dimension);
        h.finish()
    }

    fn check_index(&self, index: usize) -> Result<(), MmvError> {
        if index >= self.dimension {
            return Err(MmvError::Index {
                index,
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    #[inline]
    fn extract(&self, index: usize) -> u32 {
        let (word, shift) = self.layout.lane_position(index);
        ((self.raw()[word] >> shift) & self.layout.modulus() as u64) as u32
    }
}

impl<D: DataMut> PackedVec<D> {
    pub fn raw_mut(&mut self) -> &mut [u64] {
        self.data.as_mut()
    }

    /// Stores `value` in lane `index`. Values above `p` are reduced modulo `p`.
    ///
    /// # Errors
    ///
    /// [`MmvError::Index`] if `index >= dimension`.
    pub fn lane_set(&mut self, index: usize, value: u32) -> Result<(), MmvError> {
        self.check_index(index)?;
        self.insert(index, value);
        Ok(())
    }

    /// Sets every word to zero.
    pub fn zero(&mut self) {
        self.raw_mut().fill(0);
    }

    /// Fills every lane below `dimension` with a value drawn uniformly from
    /// `[0, p]`, so both representatives of zero occur.
    pub fn fill_uniform(&mut self, source: &mut Source) {
        let p: u64 = self.layout.modulus() as u64;
        (0..self.dimension).for_each(|i| {
            let x: u64 = source.next_u64n(p + 1, p);
            self.insert(i, x as u32);
        });
    }

    #[inline]
    fn insert(&mut self, index: usize, value: u32) {
        let p: u32 = self.layout.modulus();
        let value: u64 = if value > p { (value % p) as u64 } else { value as u64 };
        let (word, shift) = self.layout.lane_position(index);
        let w: &mut u64 = &mut self.raw_mut()[word];
        *w = (*w & !((p as u64) << shift)) | (value << shift);
    }
}

pub trait PackedVecToRef {
    fn to_ref(&self) -> PackedVec<&[u64]>;
}

impl<D: DataRef> PackedVecToRef for PackedVec<D> {
    fn to_ref(&self) -> PackedVec<&[u64]> {
        PackedVec {
            data: self.data.as_ref(),
            layout: self.layout,
            dimension: self.dimension,
        }
    }
}

pub trait PackedVecToMut {
    fn to_mut(&mut self) -> PackedVec<&mut [u64]>;
}

impl<D: DataMut> PackedVecToMut for PackedVec<D> {
    fn to_mut(&mut self) -> PackedVec<&mut [u64]> {
        PackedVec {
            data: self.data.as_mut(),
            layout: self.layout,
            dimension: self.dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_vec_lane_roundtrip_mod31() {
        let layout: LaneLayout = LaneLayout::new(31).unwrap();
        let lanes: Vec<u32> = (0..37).map(|i| (i * 7) % 32).collect();
        let vec: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, &lanes);
        assert_eq!(vec.word_count(), 5);
        assert_eq!(vec.to_lanes(), lanes);
        assert!(vec.is_well_formed());
    }

    #[test]
    fn packed_vec_lane_set_reduces_large_values() {
        let layout: LaneLayout = LaneLayout::new(15).unwrap();
        let mut vec: PackedVec<Vec<u64>> = PackedVec::alloc(&layout, 20);
        vec.lane_set(3, 15).unwrap();
        vec.lane_set(4, 16).unwrap();
        vec.lane_set(19, 47).unwrap();
        assert_eq!(vec.lane_get(3).unwrap(), 15);
        assert_eq!(vec.lane_get(4).unwrap(), 1);
        assert_eq!(vec.lane_get(19).unwrap(), 2);
        assert_eq!(vec.raw()[0], 0x0001_f000);
    }

    #[test]
    fn packed_vec_index_error() {
        let layout: LaneLayout = LaneLayout::new(3).unwrap();
        let mut vec: PackedVec<Vec<u64>> = PackedVec::alloc(&layout, 40);
        assert_eq!(
            vec.lane_get(40),
            Err(MmvError::Index {
                index: 40,
                dimension: 40
            })
        );
        assert!(vec.lane_set(64, 1).is_err());
        assert!(vec.lane_set(39, 1).is_ok());
    }

    #[test]
    fn packed_vec_well_formed_detects_padding() {
        let layout: LaneLayout = LaneLayout::new(31).unwrap();
        let mut vec: PackedVec<Vec<u64>> = PackedVec::alloc(&layout, 3);
        assert!(vec.is_well_formed());
        // Padding bit of lane 0.
        vec.raw_mut()[0] = 0x20;
        assert!(!vec.is_well_formed());
        // Lane 3 lies past the dimension.
        vec.raw_mut()[0] = 0x0100_0000;
        assert!(!vec.is_well_formed());
        vec.raw_mut()[0] = 0x001f_1f1f;
        assert!(vec.is_well_formed());
    }

    #[test]
    fn packed_vec_from_data_checks_length() {
        let layout: LaneLayout = LaneLayout::new(7).unwrap();
        let words: Vec<u64> = vec![0u64; 3];
        assert!(PackedVec::from_data(&words[..], &layout, 48).is_ok());
        assert_eq!(
            PackedVec::from_data(&words[..], &layout, 49),
            Err(MmvError::LengthMismatch {
                operand: "data",
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn packed_vec_fill_uniform_stays_in_range() {
        let layout: LaneLayout = LaneLayout::new(7).unwrap();
        let mut vec: PackedVec<Vec<u64>> = PackedVec::alloc(&layout, 1000);
        let mut source: Source = Source::new([0u8; 32]);
        vec.fill_uniform(&mut source);
        assert!(vec.is_well_formed());
        let lanes: Vec<u32> = vec.to_lanes();
        assert!(lanes.iter().all(|x| *x <= 7));
        assert!(lanes.contains(&7));
        assert!(lanes.contains(&0));
    }
}
