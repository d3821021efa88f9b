//! Qualitative buckets over the Hamming distance.
use std::fmt;
use std::ops::RangeInclusive;

/// Relationship between two documents, ordered from the closest to the farthest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relationship {
    /// Distance 0.
    Identical,
    /// Distance in `1..=3`.
    NearDuplicates,
    /// Distance in `4..=10`.
    MinorVariants,
    /// Distance in `11..=25`.
    SomewhatRelated,
    /// Distance in `26..=38`.
    Unrelated,
    /// Distance in `39..=64`.
    MaximallyDifferent,
}

impl Relationship {
    /// All relationships in order.
    pub const ALL: [Self; 6] = [
        Self::Identical,
        Self::NearDuplicates,
        Self::MinorVariants,
        Self::SomewhatRelated,
        Self::Unrelated,
        Self::MaximallyDifferent,
    ];

    /// Buckets a Hamming distance.
    ///
    /// Distances beyond 64 cannot arise from two fingerprints and fall into the last bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamming_relation::Relationship;
    ///
    /// assert_eq!(Relationship::from_distance(0), Relationship::Identical);
    /// assert_eq!(Relationship::from_distance(10), Relationship::MinorVariants);
    /// assert_eq!(Relationship::from_distance(39), Relationship::MaximallyDifferent);
    /// ```
    pub const fn from_distance(distance: u32) -> Self {
        match distance {
            0 => Self::Identical,
            1..=3 => Self::NearDuplicates,
            4..=10 => Self::MinorVariants,
            11..=25 => Self::SomewhatRelated,
            26..=38 => Self::Unrelated,
            _ => Self::MaximallyDifferent,
        }
    }

    /// Gets the closed distance range of the bucket.
    pub const fn distance_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Identical => 0..=0,
            Self::NearDuplicates => 1..=3,
            Self::MinorVariants => 4..=10,
            Self::SomewhatRelated => 11..=25,
            Self::Unrelated => 26..=38,
            Self::MaximallyDifferent => 39..=64,
        }
    }

    /// Gets the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Identical => "Identical",
            Self::NearDuplicates => "Near duplicates",
            Self::MinorVariants => "Minor variants",
            Self::SomewhatRelated => "Somewhat related",
            Self::Unrelated => "Unrelated",
            Self::MaximallyDifferent => "Maximally different",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
