/// Result of splitting a non-empty collection by a predicate.
///
/// A plain `partition` returns two possibly-empty halves. Splitting a
/// non-empty collection can leave one side empty but never both, so the
/// outcome is one of three shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition<C> {
    /// No element satisfied the predicate; holds every element.
    NoMatches(C),
    /// Every element satisfied the predicate.
    OnlyMatches(C),
    /// `(matches, non_matches)`
    Both(C, C),
}

impl<C> Partition<C> {
    /// Assembles the outcome once the head has been routed. `with_head` is
    /// the side that received the head, `other` the side built from the
    /// remaining elements only.
    pub(crate) fn from_routed(head_matched: bool, with_head: C, other: Option<C>) -> Self {
        match (head_matched, other) {
            (true, Some(non_matches)) => Partition::Both(with_head, non_matches),
            (true, None) => Partition::OnlyMatches(with_head),
            (false, Some(matches)) => Partition::Both(matches, with_head),
            (false, None) => Partition::NoMatches(with_head),
        }
    }

    /// Elements satisfying the predicate, if any.
    pub fn matches(&self) -> Option<&C> {
        match self {
            Partition::NoMatches(_) => None,
            Partition::OnlyMatches(matches) | Partition::Both(matches, _) => Some(matches),
        }
    }

    /// Elements failing the predicate, if any.
    pub fn non_matches(&self) -> Option<&C> {
        match self {
            Partition::OnlyMatches(_) => None,
            Partition::NoMatches(non_matches) | Partition::Both(_, non_matches) => {
                Some(non_matches)
            }
        }
    }

    /// Converts into the `(matches, non_matches)` pair a plain partition
    /// would produce.
    pub fn into_options(self) -> (Option<C>, Option<C>) {
        match self {
            Partition::NoMatches(non_matches) => (None, Some(non_matches)),
            Partition::OnlyMatches(matches) => (Some(matches), None),
            Partition::Both(matches, non_matches) => (Some(matches), Some(non_matches)),
        }
    }
}
