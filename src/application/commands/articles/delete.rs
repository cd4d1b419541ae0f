// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Issues the delete without checking whether the row exists, so
    /// deleting an unknown id still succeeds.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
