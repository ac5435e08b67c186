//! Master-data providers consulted at draft creation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::NonEmptyString;
use thiserror::Error;

use super::{Author, AuthorId, Publisher, PublisherId};

/// Errors from master-data lookup.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No author exists with the given id.
    #[error("author {0} was not found")]
    AuthorNotFound(AuthorId),

    /// No publisher exists with the given id.
    #[error("publisher {0} was not found")]
    PublisherNotFound(PublisherId),
}

/// Either a reference to an existing author or the data to create one.
#[derive(Debug, Clone)]
pub enum AuthorIdOrData {
    /// An existing author's id.
    Id(AuthorId),

    /// Data for an author that does not exist yet.
    Data {
        /// The new author's name.
        name: NonEmptyString,
    },
}

/// Resolves the author named in a draft-creation command.
#[async_trait]
pub trait AuthorProvider: Send + Sync {
    /// Returns the existing author for an id, or creates one from data.
    ///
    /// An unknown id fails with [`ProviderError::AuthorNotFound`].
    async fn get_or_create(&self, author: AuthorIdOrData) -> Result<Author, ProviderError>;
}

/// Resolves the publisher named in a draft-creation command.
#[async_trait]
pub trait PublisherProvider: Send + Sync {
    /// Returns the publisher with the given id.
    ///
    /// An unknown id fails with [`ProviderError::PublisherNotFound`].
    async fn get_by_id(&self, publisher_id: PublisherId) -> Result<Publisher, ProviderError>;
}

/// In-memory author provider for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthorProvider {
    authors: Arc<RwLock<HashMap<AuthorId, Author>>>,
}

impl InMemoryAuthorProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an existing author.
    pub fn register(&self, author: Author) {
        self.authors.write().unwrap().insert(author.id, author);
    }

    /// Returns the number of known authors.
    pub fn author_count(&self) -> usize {
        self.authors.read().unwrap().len()
    }
}

#[async_trait]
impl AuthorProvider for InMemoryAuthorProvider {
    async fn get_or_create(&self, author: AuthorIdOrData) -> Result<Author, ProviderError> {
        match author {
            AuthorIdOrData::Id(id) => self
                .authors
                .read()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(ProviderError::AuthorNotFound(id)),
            AuthorIdOrData::Data { name } => {
                let author = Author {
                    id: AuthorId::new(),
                    name,
                };
                self.authors
                    .write()
                    .unwrap()
                    .insert(author.id, author.clone());
                Ok(author)
            }
        }
    }
}

/// In-memory publisher provider for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPublisherProvider {
    publishers: Arc<RwLock<HashMap<PublisherId, Publisher>>>,
}

impl InMemoryPublisherProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a publisher.
    pub fn register(&self, publisher: Publisher) {
        self.publishers
            .write()
            .unwrap()
            .insert(publisher.id, publisher);
    }
}

#[async_trait]
impl PublisherProvider for InMemoryPublisherProvider {
    async fn get_by_id(&self, publisher_id: PublisherId) -> Result<Publisher, ProviderError> {
        self.publishers
            .read()
            .unwrap()
            .get(&publisher_id)
            .cloned()
            .ok_or(ProviderError::PublisherNotFound(publisher_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_by_unknown_id_fails() {
        let provider = InMemoryAuthorProvider::new();
        let result = provider
            .get_or_create(AuthorIdOrData::Id(AuthorId::new()))
            .await;
        assert!(matches!(result, Err(ProviderError::AuthorNotFound(_))));
    }

    #[tokio::test]
    async fn get_or_create_by_registered_id_returns_author() {
        let provider = InMemoryAuthorProvider::new();
        let author = Author::new(AuthorId::new(), "Teodor Lem").unwrap();
        provider.register(author.clone());

        let found = provider
            .get_or_create(AuthorIdOrData::Id(author.id))
            .await
            .unwrap();
        assert_eq!(found, author);
    }

    #[tokio::test]
    async fn get_or_create_from_data_registers_a_new_author() {
        let provider = InMemoryAuthorProvider::new();

        let created = provider
            .get_or_create(AuthorIdOrData::Data {
                name: NonEmptyString::new("Hanna Baraniec").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(provider.author_count(), 1);
        let found = provider
            .get_or_create(AuthorIdOrData::Id(created.id))
            .await
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn publisher_lookup_by_unknown_id_fails() {
        let provider = InMemoryPublisherProvider::new();
        let result = provider.get_by_id(PublisherId::new()).await;
        assert!(matches!(result, Err(ProviderError::PublisherNotFound(_))));
    }

    #[tokio::test]
    async fn publisher_lookup_returns_registered_publisher() {
        let provider = InMemoryPublisherProvider::new();
        let publisher = Publisher::new(PublisherId::new(), "North Star Press").unwrap();
        provider.register(publisher.clone());

        let found = provider.get_by_id(publisher.id).await.unwrap();
        assert_eq!(found, publisher);
    }
}
