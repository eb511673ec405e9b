/// Outcome of a congruence test between two packed vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonResult {
    /// Every lane pair is congruent.
    Equal,
    /// At least one lane pair is not congruent.
    NotEqual,
    /// The requested sub-modulus `q` does not divide `p`.
    NotDivisible,
}

impl ComparisonResult {
    /// Returns the integer return code handed to external callers:
    /// `0` for [`Self::Equal`], `1` for [`Self::NotEqual`], `2` for [`Self::NotDivisible`].
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Self::Equal => 0,
            Self::NotEqual => 1,
            Self::NotDivisible => 2,
        }
    }

    #[inline]
    pub fn from_equal(equal: bool) -> Self {
        if equal { Self::Equal } else { Self::NotEqual }
    }
}
