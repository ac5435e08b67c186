//! Value objects for the book domain.
//!
//! Identifiers are UUID newtypes; textual values wrap [`NonEmptyString`]
//! so an invalid instance cannot be constructed, and the aggregate can
//! assume every field it receives is well-formed.

use common::{AggregateId, NonEmptyString, NonNegativeInt, PositiveInt, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id! {
    /// Identity of a book aggregate.
    BookId
}

uuid_id! {
    /// Identity of an author.
    AuthorId
}

uuid_id! {
    /// Identity of a publisher.
    PublisherId
}

uuid_id! {
    /// Identity of a reviewer.
    ReviewerId
}

uuid_id! {
    /// Identity of a translator.
    TranslatorId
}

impl From<BookId> for AggregateId {
    fn from(id: BookId) -> Self {
        AggregateId::from_uuid(id.0)
    }
}

impl From<AggregateId> for BookId {
    fn from(id: AggregateId) -> Self {
        BookId(id.as_uuid())
    }
}

macro_rules! text_value {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonEmptyString);

        impl $name {
            /// Creates the value, rejecting empty or blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                Ok(Self(NonEmptyString::new(value)?))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }
    };
}

text_value! {
    /// The book's title.
    Title
}

text_value! {
    /// The book's genre.
    Genre
}

text_value! {
    /// A chapter's title.
    ChapterTitle
}

text_value! {
    /// The book's ISBN.
    Isbn
}

text_value! {
    /// Language of a translation.
    Language
}

text_value! {
    /// A publication format type, e.g. "Hardcover" or "Paperback".
    FormatType
}

/// An author, resolved through the author provider at draft creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// The author's identity.
    pub id: AuthorId,

    /// The author's display name.
    pub name: NonEmptyString,
}

impl Author {
    /// Creates an author.
    pub fn new(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
        })
    }
}

/// A publisher, resolved through the publisher provider at draft creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// The publisher's identity.
    pub id: PublisherId,

    /// The publisher's display name.
    pub name: NonEmptyString,
}

impl Publisher {
    /// Creates a publisher.
    pub fn new(id: PublisherId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
        })
    }
}

/// A committee member reviewing the book during editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    /// The reviewer's identity; uniqueness within one book is keyed on it.
    pub id: ReviewerId,

    /// The reviewer's display name.
    pub name: NonEmptyString,
}

impl Reviewer {
    /// Creates a reviewer.
    pub fn new(id: ReviewerId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
        })
    }
}

/// The translator of one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translator {
    /// The translator's identity.
    pub id: TranslatorId,

    /// The translator's display name.
    pub name: NonEmptyString,
}

impl Translator {
    /// Creates a translator.
    pub fn new(id: TranslatorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
        })
    }
}

/// A translation of the book into another language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Target language.
    pub language: Language,

    /// Who translated it.
    pub translator: Translator,
}

impl Translation {
    /// Creates a translation.
    pub fn new(language: Language, translator: Translator) -> Self {
        Self {
            language,
            translator,
        }
    }
}

/// A publication format with its print-run bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// The format type; at most one format per type exists on a book.
    pub format_type: FormatType,

    /// Copies printed in this format.
    pub total_copies: PositiveInt,

    /// Copies sold in this format.
    pub sold_copies: NonNegativeInt,
}

impl Format {
    /// Creates a format.
    pub fn new(
        format_type: FormatType,
        total_copies: PositiveInt,
        sold_copies: NonNegativeInt,
    ) -> Self {
        Self {
            format_type,
            total_copies,
            sold_copies,
        }
    }
}

/// The editorial committee's sign-off, set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeApproval {
    /// Whether the committee approved the book.
    pub is_approved: bool,

    /// The committee's feedback.
    pub feedback: NonEmptyString,
}

impl CommitteeApproval {
    /// Creates a committee approval.
    pub fn new(is_approved: bool, feedback: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            is_approved,
            feedback: NonEmptyString::new(feedback)?,
        })
    }
}

/// A chapter's 1-based position within the book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChapterNumber(PositiveInt);

impl ChapterNumber {
    /// Creates a chapter number, rejecting zero and negative input.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        Ok(Self(PositiveInt::new(value)?))
    }

    /// Returns the number.
    pub fn value(&self) -> i32 {
        self.0.value()
    }
}

impl std::fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chapter's text together with its analyzed page and illustration
/// counts.
///
/// The counts are computed once, by the caller's `ContentAnalyzer`, when
/// the content is constructed; they are plain data from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    text: String,
    total_pages: NonNegativeInt,
    number_of_illustrations: NonNegativeInt,
}

impl ChapterContent {
    /// Creates chapter content from text and its analyzed counts.
    pub fn new(
        text: impl Into<String>,
        total_pages: NonNegativeInt,
        number_of_illustrations: NonNegativeInt,
    ) -> Self {
        Self {
            text: text.into(),
            total_pages,
            number_of_illustrations,
        }
    }

    /// Returns empty content with zero counts.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            total_pages: NonNegativeInt::zero(),
            number_of_illustrations: NonNegativeInt::zero(),
        }
    }

    /// Returns the chapter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the analyzed page count.
    pub fn total_pages(&self) -> NonNegativeInt {
        self.total_pages
    }

    /// Returns the analyzed illustration count.
    pub fn number_of_illustrations(&self) -> NonNegativeInt {
        self.number_of_illustrations
    }
}

/// A chapter of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based position; the aggregate keeps the numbering contiguous.
    pub number: ChapterNumber,

    /// The chapter's title, unique within the book.
    pub title: ChapterTitle,

    /// The chapter's content.
    pub content: ChapterContent,
}

impl Chapter {
    /// Creates a chapter.
    pub fn new(number: ChapterNumber, title: ChapterTitle, content: ChapterContent) -> Self {
        Self {
            number,
            title,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_new_creates_unique_ids() {
        assert_ne!(BookId::new(), BookId::new());
    }

    #[test]
    fn book_id_converts_to_aggregate_id_and_back() {
        let id = BookId::new();
        let aggregate_id: AggregateId = id.into();
        assert_eq!(BookId::from(aggregate_id), id);
        assert_eq!(aggregate_id.as_uuid(), id.as_uuid());
    }

    #[test]
    fn title_rejects_blank_input() {
        assert!(Title::new("The Art of Computer Programming").is_ok());
        assert!(Title::new("  ").is_err());
    }

    #[test]
    fn genre_and_isbn_wrap_non_empty_text() {
        let genre = Genre::new("Fiction").unwrap();
        assert_eq!(genre.as_str(), "Fiction");

        let isbn = Isbn::new("978-0-13-468599-1").unwrap();
        assert_eq!(isbn.as_str(), "978-0-13-468599-1");
    }

    #[test]
    fn reviewer_requires_a_name() {
        assert!(Reviewer::new(ReviewerId::new(), "Ursula Curelaru").is_ok());
        assert!(Reviewer::new(ReviewerId::new(), "").is_err());
    }

    #[test]
    fn chapter_number_rejects_non_positive() {
        assert_eq!(ChapterNumber::new(1).unwrap().value(), 1);
        assert!(ChapterNumber::new(0).is_err());
        assert!(ChapterNumber::new(-2).is_err());
    }

    #[test]
    fn chapter_content_carries_analyzed_counts() {
        let content = ChapterContent::new(
            "Once upon a time",
            NonNegativeInt::new(3).unwrap(),
            NonNegativeInt::new(1).unwrap(),
        );
        assert_eq!(content.text(), "Once upon a time");
        assert_eq!(content.total_pages().value(), 3);
        assert_eq!(content.number_of_illustrations().value(), 1);
    }

    #[test]
    fn empty_chapter_content_has_zero_counts() {
        let content = ChapterContent::empty();
        assert_eq!(content.text(), "");
        assert_eq!(content.total_pages().value(), 0);
        assert_eq!(content.number_of_illustrations().value(), 0);
    }

    #[test]
    fn format_serialization_roundtrip() {
        let format = Format::new(
            FormatType::new("Hardcover").unwrap(),
            PositiveInt::new(1000).unwrap(),
            NonNegativeInt::new(50).unwrap(),
        );
        let json = serde_json::to_string(&format).unwrap();
        let back: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn committee_approval_requires_feedback() {
        assert!(CommitteeApproval::new(true, "Ready for print").is_ok());
        assert!(CommitteeApproval::new(true, "").is_err());
    }

    #[test]
    fn translation_serialization_roundtrip() {
        let translation = Translation::new(
            Language::new("Polish").unwrap(),
            Translator::new(TranslatorId::new(), "Jan Kowalski").unwrap(),
        );
        let json = serde_json::to_string(&translation).unwrap();
        let back: Translation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, translation);
    }
}
