//! Book service providing one entry point per business operation.

use std::sync::Arc;

use chrono::Utc;
use event_log::EventLog;

use crate::command::{CommandHandler, CommandResult};
use crate::error::DomainError;

use super::{
    AddChapter, AddFormat, AddReviewer, AddTranslation, Approve, Book, BookId, ChapterContent,
    CreateDraft, MoveToEditing, MoveToOutOfPrint, MoveToPrinting, MoveToPublished, RemoveFormat,
    SetIsbn,
    providers::{AuthorProvider, PublisherProvider},
    services::{ContentAnalyzer, PublishingHouse},
};

/// Service for managing books.
///
/// Wraps the decide-and-apply handler and the external collaborators:
/// the master-data providers consulted at draft creation, the publishing
/// house's genre quota, and the content analyzer that derives page and
/// illustration counts from chapter text.
pub struct BookService<S: EventLog> {
    handler: CommandHandler<S, Book>,
    authors: Arc<dyn AuthorProvider>,
    publishers: Arc<dyn PublisherProvider>,
    publishing_house: Arc<dyn PublishingHouse>,
    analyzer: Arc<dyn ContentAnalyzer>,
}

impl<S: EventLog> BookService<S> {
    /// Creates a book service over the given log and collaborators.
    pub fn new(
        log: S,
        authors: Arc<dyn AuthorProvider>,
        publishers: Arc<dyn PublisherProvider>,
        publishing_house: Arc<dyn PublishingHouse>,
        analyzer: Arc<dyn ContentAnalyzer>,
    ) -> Self {
        Self {
            handler: CommandHandler::new(log),
            authors,
            publishers,
            publishing_house,
            analyzer,
        }
    }

    /// Returns a reference to the underlying command handler.
    pub fn handler(&self) -> &CommandHandler<S, Book> {
        &self.handler
    }

    /// Creates a new draft, resolving the author and publisher first.
    #[tracing::instrument(skip(self))]
    pub async fn create_draft(
        &self,
        cmd: CreateDraft,
    ) -> Result<CommandResult<Book>, DomainError> {
        let author = self.authors.get_or_create(cmd.author.clone()).await?;
        let publisher = self.publishers.get_by_id(cmd.publisher_id).await?;

        let CreateDraft {
            book_id,
            title,
            edition,
            genre,
            ..
        } = cmd;

        self.handler
            .execute(book_id.into(), |book| {
                book.create_draft(book_id, title, author, publisher, edition, genre)
            })
            .await
    }

    /// Adds a chapter, analyzing its text into content first.
    #[tracing::instrument(skip(self))]
    pub async fn add_chapter(&self, cmd: AddChapter) -> Result<CommandResult<Book>, DomainError> {
        let AddChapter {
            book_id,
            title,
            text,
        } = cmd;

        let stats = self.analyzer.analyze(&text);
        let content = ChapterContent::new(text, stats.total_pages, stats.number_of_illustrations);

        self.handler
            .execute(book_id.into(), |book| book.add_chapter(title, content))
            .await
    }

    /// Moves a book to editing.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_editing(
        &self,
        cmd: MoveToEditing,
    ) -> Result<CommandResult<Book>, DomainError> {
        self.handler
            .execute(cmd.book_id.into(), |book| book.move_to_editing())
            .await
    }

    /// Adds a translation.
    #[tracing::instrument(skip(self))]
    pub async fn add_translation(
        &self,
        cmd: AddTranslation,
    ) -> Result<CommandResult<Book>, DomainError> {
        let AddTranslation {
            book_id,
            translation,
        } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.add_translation(translation))
            .await
    }

    /// Adds a publication format.
    #[tracing::instrument(skip(self))]
    pub async fn add_format(&self, cmd: AddFormat) -> Result<CommandResult<Book>, DomainError> {
        let AddFormat { book_id, format } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.add_format(format))
            .await
    }

    /// Removes a publication format.
    #[tracing::instrument(skip(self))]
    pub async fn remove_format(
        &self,
        cmd: RemoveFormat,
    ) -> Result<CommandResult<Book>, DomainError> {
        let RemoveFormat { book_id, format } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.remove_format(&format))
            .await
    }

    /// Adds a reviewer.
    #[tracing::instrument(skip(self))]
    pub async fn add_reviewer(
        &self,
        cmd: AddReviewer,
    ) -> Result<CommandResult<Book>, DomainError> {
        let AddReviewer { book_id, reviewer } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.add_reviewer(reviewer))
            .await
    }

    /// Records the committee's approval.
    #[tracing::instrument(skip(self))]
    pub async fn approve(&self, cmd: Approve) -> Result<CommandResult<Book>, DomainError> {
        let Approve {
            book_id,
            committee_approval,
        } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.approve(committee_approval))
            .await
    }

    /// Assigns the ISBN.
    #[tracing::instrument(skip(self))]
    pub async fn set_isbn(&self, cmd: SetIsbn) -> Result<CommandResult<Book>, DomainError> {
        let SetIsbn { book_id, isbn } = cmd;

        self.handler
            .execute(book_id.into(), |book| book.set_isbn(isbn))
            .await
    }

    /// Sends a book to printing, consulting the genre quota.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_printing(
        &self,
        cmd: MoveToPrinting,
    ) -> Result<CommandResult<Book>, DomainError> {
        let MoveToPrinting {
            book_id,
            binding_type,
            summary,
        } = cmd;
        let publishing_house = Arc::clone(&self.publishing_house);

        self.handler
            .execute(book_id.into(), move |book| {
                book.move_to_printing(binding_type, summary, publishing_house.as_ref())
            })
            .await
    }

    /// Publishes a book, stamping today's date.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_published(
        &self,
        cmd: MoveToPublished,
    ) -> Result<CommandResult<Book>, DomainError> {
        let today = Utc::now().date_naive();

        self.handler
            .execute(cmd.book_id.into(), |book| book.move_to_published(today))
            .await
    }

    /// Retires a book.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_out_of_print(
        &self,
        cmd: MoveToOutOfPrint,
    ) -> Result<CommandResult<Book>, DomainError> {
        self.handler
            .execute(cmd.book_id.into(), |book| book.move_to_out_of_print())
            .await
    }

    /// Loads a book by id.
    ///
    /// Returns None if no such book exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_book(&self, book_id: BookId) -> Result<Option<Book>, DomainError> {
        self.handler.load_existing(book_id.into()).await
    }
}
