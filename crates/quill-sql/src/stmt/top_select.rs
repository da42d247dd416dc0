use super::Select;

/// A select bounded to its first `count` rows, with no skip.
#[derive(Debug, Clone)]
pub struct TopSelect {
    pub select: Select,
    pub count: u64,
}
