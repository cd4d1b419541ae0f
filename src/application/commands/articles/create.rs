// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

/// Any `id` supplied by the client has already been discarded at the
/// request boundary; the storage engine assigns one on insert.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            author: command.author,
            title: command.title,
            publisher: command.publisher,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
