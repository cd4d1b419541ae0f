// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;

/// A persisted article. All text fields are nullable in storage; `None`
/// is a distinct state from an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

/// An article about to be inserted. The id is assigned by the storage
/// engine, so there is none here.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}
