use crate::domain::article::Article;
use serde::{Deserialize, Serialize};

/// Wire representation of an article. Absent fields serialize as `null`,
/// matching their nullable columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: i64,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author: article.author,
            title: article.title,
            publisher: article.publisher,
        }
    }
}
