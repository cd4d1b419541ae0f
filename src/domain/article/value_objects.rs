use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Storage-assigned article identifier. Always positive; never
/// client-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse an identifier arriving as a path segment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation("article id must be an integer".into()))?;
        Self::new(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
