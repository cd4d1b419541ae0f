// tests/support/mocks.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use kiji::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use kiji::domain::errors::{DomainError, DomainResult};

/* ---------------------------- InMemoryArticles ---------------------------- */

/// Article store backed by a map, with ids assigned the way a serial
/// column would assign them. Implements both repository traits so a
/// single instance can be shared between the read and write sides.
#[derive(Default)]
pub struct InMemoryArticles {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let stored = Article {
            id: ArticleId::new(store.next_id).expect("serial ids start at 1"),
            author: article.author,
            title: article.title,
            publisher: article.publisher,
        };
        let id = store.next_id;
        store.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // Mirrors the SQL repository: removing an absent row is not an error.
        self.inner.lock().unwrap().rows.remove(&i64::from(id));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }
}

/* ---------------------------- FailingArticles ----------------------------- */

/// Storage double where every operation fails, for driving the generic
/// 400 paths.
pub struct FailingArticles;

#[async_trait]
impl ArticleWriteRepository for FailingArticles {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("storage offline".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("storage offline".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticles {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("storage offline".into()))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("storage offline".into()))
    }
}
