use super::Select;

/// A select bounded to the row window `(skip, skip + count]`.
///
/// How the window renders is the most dialect-divergent concern in the
/// emitter; the statement itself only records the window. Ranking-based
/// dialects require the base select to carry an explicit ordering.
#[derive(Debug, Clone)]
pub struct PagedSelect {
    pub select: Select,
    pub skip: u64,
    pub count: u64,
}
