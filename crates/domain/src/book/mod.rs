//! Book aggregate and related types.

mod aggregate;
mod commands;
mod events;
pub mod providers;
mod service;
pub mod services;
mod state;
mod value_objects;

pub use aggregate::Book;
pub use commands::*;
pub use events::{
    ApprovedData, BookEvent, ChapterAddedData, FormatAddedData, FormatRemovedData, IsbnSetData,
    MovedToEditingData, MovedToOutOfPrintData, MovedToPrintingData, PublishedData,
    ReviewerAddedData, ReviewerRemovedData, TranslationAddedData, WritingStartedData,
};
pub use providers::{
    AuthorIdOrData, AuthorProvider, InMemoryAuthorProvider, InMemoryPublisherProvider,
    ProviderError, PublisherProvider,
};
pub use service::BookService;
pub use services::{
    ContentAnalyzer, ContentStats, FixedContentAnalyzer, InMemoryPublishingHouse, PublishingHouse,
    WordCountAnalyzer,
};
pub use state::BookState;
pub use value_objects::{
    Author, AuthorId, BookId, Chapter, ChapterContent, ChapterNumber, ChapterTitle,
    CommitteeApproval, Format, FormatType, Genre, Isbn, Language, Publisher, PublisherId,
    Reviewer, ReviewerId, Title, Translation, Translator, TranslatorId,
};

use common::ValidationError;
use thiserror::Error;

/// Errors raised when a book operation's preconditions are not met.
///
/// One variant per business rule, each carrying the data a caller needs
/// to explain the rejection. The operation performs no mutation and
/// emits no event when one of these is returned.
#[derive(Debug, Error)]
pub enum BookError {
    /// An operation other than draft creation hit an empty aggregate.
    #[error("book has not been drafted yet")]
    NotDrafted,

    /// Draft creation hit an aggregate that already exists.
    #[error("book has already been drafted")]
    AlreadyDrafted,

    /// The operation is not defined for the book's current state.
    #[error("cannot {action} from the {current_state} state")]
    InvalidStateTransition {
        current_state: BookState,
        action: &'static str,
    },

    /// A chapter with this title already exists.
    #[error("chapter with title '{title}' already exists")]
    DuplicateChapterTitle { title: String },

    /// The chapter's title does not continue the sequence.
    #[error(
        "chapters must be added in sequence; the title of the next chapter should be '{expected}'"
    )]
    ChapterOutOfSequence { expected: String },

    /// The transition needs at least one chapter.
    #[error("a book must have at least one chapter to {action}")]
    NoChapters { action: &'static str },

    /// The transition needs a genre.
    #[error("genre must be specified to {action}")]
    MissingGenre { action: &'static str },

    /// The translation cap has been reached.
    #[error("cannot add more translations, at most {limit} are allowed")]
    TranslationLimitReached { limit: usize },

    /// A format of this type already exists.
    #[error("format {format_type} already exists")]
    FormatAlreadyExists { format_type: String },

    /// No format of this type exists.
    #[error("format {format_type} does not exist")]
    FormatNotFound { format_type: String },

    /// The reviewer is already on this book's committee.
    #[error("{name} is already a reviewer")]
    ReviewerAlreadyAdded { name: String },

    /// Not enough reviewers for the attempted step.
    #[error("at least {required} reviewers are required, got {actual}")]
    NotEnoughReviewers { required: usize, actual: usize },

    /// The book has not been approved by the committee.
    #[error("cannot move to printing until the book has been approved")]
    NotApproved,

    /// The ISBN is write-once.
    #[error("cannot change already set ISBN")]
    IsbnAlreadySet,

    /// Publication requires an ISBN.
    #[error("cannot move to published without an ISBN")]
    MissingIsbn,

    /// Not enough translations for publication.
    #[error("at least {required} translations are required, got {actual}")]
    NotEnoughTranslations { required: usize, actual: usize },

    /// The publishing house's genre quota is exhausted.
    #[error("the genre limit for {genre} has been reached")]
    GenreLimitReached { genre: String },

    /// More than 10% of the printed copies have been sold.
    #[error("cannot move out of print when more than 10% of printed copies are sold")]
    StillSelling,

    /// A value derived inside the operation failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
