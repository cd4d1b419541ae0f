mod create;
mod delete;
mod service;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
