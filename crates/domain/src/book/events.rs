//! Book domain events.
//!
//! The taxonomy is closed: one variant per fact that can happen to a
//! book. Consumers dispatch with an exhaustive `match`, so adding a
//! variant breaks every consumer until it handles the new fact.

use chrono::NaiveDate;
use common::{NonEmptyString, NonNegativeInt, PositiveInt};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{
    Author, BookId, Chapter, CommitteeApproval, Format, Genre, Isbn, Publisher, Reviewer, Title,
    Translation,
};

/// Events that can occur on a book aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BookEvent {
    /// A draft was created and writing started.
    WritingStarted(WritingStartedData),

    /// A chapter was added to the draft.
    ChapterAdded(ChapterAddedData),

    /// The book entered editing.
    MovedToEditing(MovedToEditingData),

    /// A translation was added.
    TranslationAdded(TranslationAddedData),

    /// A publication format was added.
    FormatAdded(FormatAddedData),

    /// A publication format was removed.
    FormatRemoved(FormatRemovedData),

    /// A reviewer joined the committee for this book.
    ReviewerAdded(ReviewerAddedData),

    /// A reviewer left the committee for this book.
    ReviewerRemoved(ReviewerRemovedData),

    /// The committee approved the book.
    Approved(ApprovedData),

    /// The ISBN was assigned.
    IsbnSet(IsbnSetData),

    /// The book went to the printing house.
    MovedToPrinting(MovedToPrintingData),

    /// The book was published.
    Published(PublishedData),

    /// The book was retired.
    MovedToOutOfPrint(MovedToOutOfPrintData),
}

impl DomainEvent for BookEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BookEvent::WritingStarted(_) => "WritingStarted",
            BookEvent::ChapterAdded(_) => "ChapterAdded",
            BookEvent::MovedToEditing(_) => "MovedToEditing",
            BookEvent::TranslationAdded(_) => "TranslationAdded",
            BookEvent::FormatAdded(_) => "FormatAdded",
            BookEvent::FormatRemoved(_) => "FormatRemoved",
            BookEvent::ReviewerAdded(_) => "ReviewerAdded",
            BookEvent::ReviewerRemoved(_) => "ReviewerRemoved",
            BookEvent::Approved(_) => "Approved",
            BookEvent::IsbnSet(_) => "IsbnSet",
            BookEvent::MovedToPrinting(_) => "MovedToPrinting",
            BookEvent::Published(_) => "Published",
            BookEvent::MovedToOutOfPrint(_) => "MovedToOutOfPrint",
        }
    }
}

/// Data for WritingStarted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingStartedData {
    /// The new book's identity.
    pub book_id: BookId,

    /// The book's title.
    pub title: Title,

    /// The resolved author.
    pub author: Author,

    /// The resolved publisher.
    pub publisher: Publisher,

    /// Which edition this is.
    pub edition: PositiveInt,

    /// The genre, when known at draft time.
    pub genre: Option<Genre>,
}

/// Data for ChapterAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterAddedData {
    /// The book the chapter belongs to.
    pub book_id: BookId,

    /// The chapter, numbered by the aggregate.
    pub chapter: Chapter,
}

/// Data for MovedToEditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovedToEditingData {
    /// The book that entered editing.
    pub book_id: BookId,
}

/// Data for TranslationAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationAddedData {
    /// The book being translated.
    pub book_id: BookId,

    /// The added translation.
    pub translation: Translation,
}

/// Data for FormatAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatAddedData {
    /// The book the format belongs to.
    pub book_id: BookId,

    /// The added format.
    pub format: Format,
}

/// Data for FormatRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRemovedData {
    /// The book the format belonged to.
    pub book_id: BookId,

    /// The removed format as it was stored.
    pub format: Format,
}

/// Data for ReviewerAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerAddedData {
    /// The book under review.
    pub book_id: BookId,

    /// The added reviewer.
    pub reviewer: Reviewer,
}

/// Data for ReviewerRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerRemovedData {
    /// The book under review.
    pub book_id: BookId,

    /// The removed reviewer.
    pub reviewer: Reviewer,
}

/// Data for Approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedData {
    /// The approved book.
    pub book_id: BookId,

    /// The committee's sign-off.
    pub committee_approval: CommitteeApproval,
}

/// Data for IsbnSet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsbnSetData {
    /// The book the ISBN was assigned to.
    pub book_id: BookId,

    /// The assigned ISBN.
    pub isbn: Isbn,
}

/// Data for MovedToPrinting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovedToPrintingData {
    /// The book sent to printing.
    pub book_id: BookId,

    /// Total pages across all chapters.
    pub total_pages: PositiveInt,

    /// Total illustrations across all chapters.
    pub number_of_illustrations: NonNegativeInt,

    /// The chosen binding.
    pub binding_type: NonEmptyString,

    /// The marketing summary.
    pub summary: NonEmptyString,
}

/// Data for Published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedData {
    /// The published book.
    pub book_id: BookId,

    /// Its ISBN.
    pub isbn: Isbn,

    /// Its title.
    pub title: Title,

    /// Its author.
    pub author: Author,

    /// The publication date.
    pub published_at: NaiveDate,
}

/// Data for MovedToOutOfPrint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovedToOutOfPrintData {
    /// The retired book.
    pub book_id: BookId,
}

// Convenience constructors for events
impl BookEvent {
    /// Creates a WritingStarted event.
    pub fn writing_started(
        book_id: BookId,
        title: Title,
        author: Author,
        publisher: Publisher,
        edition: PositiveInt,
        genre: Option<Genre>,
    ) -> Self {
        BookEvent::WritingStarted(WritingStartedData {
            book_id,
            title,
            author,
            publisher,
            edition,
            genre,
        })
    }

    /// Creates a ChapterAdded event.
    pub fn chapter_added(book_id: BookId, chapter: Chapter) -> Self {
        BookEvent::ChapterAdded(ChapterAddedData { book_id, chapter })
    }

    /// Creates a MovedToEditing event.
    pub fn moved_to_editing(book_id: BookId) -> Self {
        BookEvent::MovedToEditing(MovedToEditingData { book_id })
    }

    /// Creates a TranslationAdded event.
    pub fn translation_added(book_id: BookId, translation: Translation) -> Self {
        BookEvent::TranslationAdded(TranslationAddedData {
            book_id,
            translation,
        })
    }

    /// Creates a FormatAdded event.
    pub fn format_added(book_id: BookId, format: Format) -> Self {
        BookEvent::FormatAdded(FormatAddedData { book_id, format })
    }

    /// Creates a FormatRemoved event.
    pub fn format_removed(book_id: BookId, format: Format) -> Self {
        BookEvent::FormatRemoved(FormatRemovedData { book_id, format })
    }

    /// Creates a ReviewerAdded event.
    pub fn reviewer_added(book_id: BookId, reviewer: Reviewer) -> Self {
        BookEvent::ReviewerAdded(ReviewerAddedData { book_id, reviewer })
    }

    /// Creates a ReviewerRemoved event.
    pub fn reviewer_removed(book_id: BookId, reviewer: Reviewer) -> Self {
        BookEvent::ReviewerRemoved(ReviewerRemovedData { book_id, reviewer })
    }

    /// Creates an Approved event.
    pub fn approved(book_id: BookId, committee_approval: CommitteeApproval) -> Self {
        BookEvent::Approved(ApprovedData {
            book_id,
            committee_approval,
        })
    }

    /// Creates an IsbnSet event.
    pub fn isbn_set(book_id: BookId, isbn: Isbn) -> Self {
        BookEvent::IsbnSet(IsbnSetData { book_id, isbn })
    }

    /// Creates a MovedToPrinting event.
    pub fn moved_to_printing(
        book_id: BookId,
        total_pages: PositiveInt,
        number_of_illustrations: NonNegativeInt,
        binding_type: NonEmptyString,
        summary: NonEmptyString,
    ) -> Self {
        BookEvent::MovedToPrinting(MovedToPrintingData {
            book_id,
            total_pages,
            number_of_illustrations,
            binding_type,
            summary,
        })
    }

    /// Creates a Published event.
    pub fn published(
        book_id: BookId,
        isbn: Isbn,
        title: Title,
        author: Author,
        published_at: NaiveDate,
    ) -> Self {
        BookEvent::Published(PublishedData {
            book_id,
            isbn,
            title,
            author,
            published_at,
        })
    }

    /// Creates a MovedToOutOfPrint event.
    pub fn moved_to_out_of_print(book_id: BookId) -> Self {
        BookEvent::MovedToOutOfPrint(MovedToOutOfPrintData { book_id })
    }

    /// Returns the id of the book the event belongs to.
    pub fn book_id(&self) -> BookId {
        match self {
            BookEvent::WritingStarted(data) => data.book_id,
            BookEvent::ChapterAdded(data) => data.book_id,
            BookEvent::MovedToEditing(data) => data.book_id,
            BookEvent::TranslationAdded(data) => data.book_id,
            BookEvent::FormatAdded(data) => data.book_id,
            BookEvent::FormatRemoved(data) => data.book_id,
            BookEvent::ReviewerAdded(data) => data.book_id,
            BookEvent::ReviewerRemoved(data) => data.book_id,
            BookEvent::Approved(data) => data.book_id,
            BookEvent::IsbnSet(data) => data.book_id,
            BookEvent::MovedToPrinting(data) => data.book_id,
            BookEvent::Published(data) => data.book_id,
            BookEvent::MovedToOutOfPrint(data) => data.book_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{
        AuthorId, ChapterContent, ChapterNumber, ChapterTitle, FormatType, PublisherId, ReviewerId,
    };
    use common::NonNegativeInt;

    fn author() -> Author {
        Author::new(AuthorId::new(), "Teodor Lem").unwrap()
    }

    fn publisher() -> Publisher {
        Publisher::new(PublisherId::new(), "North Star Press").unwrap()
    }

    #[test]
    fn event_type_covers_every_variant() {
        let book_id = BookId::new();

        let event = BookEvent::writing_started(
            book_id,
            Title::new("Solaris Revisited").unwrap(),
            author(),
            publisher(),
            PositiveInt::new(1).unwrap(),
            Some(Genre::new("Fiction").unwrap()),
        );
        assert_eq!(event.event_type(), "WritingStarted");

        let chapter = Chapter::new(
            ChapterNumber::new(1).unwrap(),
            ChapterTitle::new("chapter 1").unwrap(),
            ChapterContent::empty(),
        );
        assert_eq!(
            BookEvent::chapter_added(book_id, chapter).event_type(),
            "ChapterAdded"
        );

        assert_eq!(
            BookEvent::moved_to_editing(book_id).event_type(),
            "MovedToEditing"
        );

        let reviewer = Reviewer::new(ReviewerId::new(), "Maja Ilves").unwrap();
        assert_eq!(
            BookEvent::reviewer_added(book_id, reviewer.clone()).event_type(),
            "ReviewerAdded"
        );
        assert_eq!(
            BookEvent::reviewer_removed(book_id, reviewer).event_type(),
            "ReviewerRemoved"
        );

        let approval = CommitteeApproval::new(true, "Ready").unwrap();
        assert_eq!(
            BookEvent::approved(book_id, approval).event_type(),
            "Approved"
        );

        assert_eq!(
            BookEvent::isbn_set(book_id, Isbn::new("978-83-01-00000-1").unwrap()).event_type(),
            "IsbnSet"
        );

        assert_eq!(
            BookEvent::moved_to_out_of_print(book_id).event_type(),
            "MovedToOutOfPrint"
        );
    }

    #[test]
    fn writing_started_serialization_roundtrip() {
        let book_id = BookId::new();
        let event = BookEvent::writing_started(
            book_id,
            Title::new("Solaris Revisited").unwrap(),
            author(),
            publisher(),
            PositiveInt::new(2).unwrap(),
            None,
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("WritingStarted"));

        let back: BookEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.book_id(), book_id);
    }

    #[test]
    fn moved_to_printing_serialization_roundtrip() {
        let event = BookEvent::moved_to_printing(
            BookId::new(),
            PositiveInt::new(312).unwrap(),
            NonNegativeInt::new(14).unwrap(),
            NonEmptyString::new("Hardcover").unwrap(),
            NonEmptyString::new("A haunting return to the ocean planet").unwrap(),
        );

        let json = serde_json::to_string(&event).unwrap();
        let back: BookEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn published_carries_the_publication_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let event = BookEvent::published(
            BookId::new(),
            Isbn::new("978-83-01-00000-1").unwrap(),
            Title::new("Solaris Revisited").unwrap(),
            author(),
            date,
        );

        let json = serde_json::to_string(&event).unwrap();
        let back: BookEvent = serde_json::from_str(&json).unwrap();
        if let BookEvent::Published(data) = back {
            assert_eq!(data.published_at, date);
        } else {
            panic!("expected Published event");
        }
    }

    #[test]
    fn format_events_roundtrip() {
        let format = Format::new(
            FormatType::new("Paperback").unwrap(),
            PositiveInt::new(500).unwrap(),
            NonNegativeInt::zero(),
        );
        let added = BookEvent::format_added(BookId::new(), format.clone());
        let json = serde_json::to_string(&added).unwrap();
        let back: BookEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event_type(), "FormatAdded");

        let removed = BookEvent::format_removed(BookId::new(), format);
        assert_eq!(removed.event_type(), "FormatRemoved");
    }
}
