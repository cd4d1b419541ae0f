// src/infrastructure/repositories/mod.rs
mod postgres_article;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};

use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
