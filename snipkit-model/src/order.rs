use std::cmp::Ordering;

/// Direction applied to a single-key sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Map the `ascending` flag used by callers that think in booleans.
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Ascending)
    }

    /// Orient a natural ordering to this direction.
    #[inline]
    pub fn apply(self, natural: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => natural,
            SortOrder::Descending => natural.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    fn from(ascending: bool) -> Self {
        SortOrder::from_ascending(ascending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert!(SortOrder::from(true).is_ascending());
        assert!(!SortOrder::from(false).is_ascending());
    }

    #[test]
    fn descending_inverts_natural_order() {
        assert_eq!(
            SortOrder::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
    }
}
