//! Domain layer for the book publishing system.
//!
//! This crate provides:
//! - the `Aggregate` and `DomainEvent` traits
//! - the `CommandHandler` decide-and-apply protocol
//! - the `Book` aggregate with its state machine, value objects, closed
//!   event taxonomy, commands and service facade

pub mod aggregate;
pub mod book;
pub mod command;
pub mod error;

pub use aggregate::{Aggregate, DomainEvent};
pub use book::{
    AddChapter, AddFormat, AddReviewer, AddTranslation, Approve, Author, AuthorId,
    AuthorIdOrData, AuthorProvider, Book, BookError, BookEvent, BookId, BookService, BookState,
    Chapter, ChapterContent, ChapterNumber, ChapterTitle, CommitteeApproval, ContentAnalyzer,
    ContentStats, CreateDraft, FixedContentAnalyzer, Format, FormatType, Genre,
    InMemoryAuthorProvider, InMemoryPublisherProvider, InMemoryPublishingHouse, Isbn, Language,
    MoveToEditing, MoveToOutOfPrint, MoveToPrinting, MoveToPublished, ProviderError, Publisher,
    PublisherId, PublisherProvider, PublishingHouse, RemoveFormat, Reviewer, ReviewerId,
    SetIsbn, Title, Translation, Translator, TranslatorId, WordCountAnalyzer,
};
pub use command::{Command, CommandHandler, CommandResult};
pub use error::DomainError;
