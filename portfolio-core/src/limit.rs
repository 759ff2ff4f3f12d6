use std::fmt;

/// The maximum number of comments that are returned by a single query.
///
/// The raw input is a free-text request parameter. It is never
/// rejected: unparsable input falls back to [`CommentLimit::DEFAULT`]
/// and numbers outside of the accepted range are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommentLimit(usize);

impl CommentLimit {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;
    pub const DEFAULT: Self = Self(10);

    pub fn parse_or_default(input: Option<&str>) -> Self {
        input
            .and_then(|s| s.parse::<i32>().ok())
            .map(Self::clamped)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn clamped(limit: i32) -> Self {
        // Both bounds are non-negative
        Self(limit.clamp(Self::MIN, Self::MAX) as usize)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for CommentLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CommentLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
