//! Book aggregate implementation.

use std::collections::HashMap;

use chrono::NaiveDate;
use common::{AggregateId, NonEmptyString, NonNegativeInt, PositiveInt};
use event_log::Sequence;

use crate::aggregate::Aggregate;

use super::{
    Author, BookError, BookEvent, BookId, BookState, Chapter, ChapterContent, ChapterNumber,
    ChapterTitle, CommitteeApproval, Format, FormatType, Genre, Isbn, Publisher, Reviewer, Title,
    Translation,
    events::{
        ApprovedData, ChapterAddedData, FormatAddedData, FormatRemovedData, IsbnSetData,
        ReviewerAddedData, ReviewerRemovedData, TranslationAddedData, WritingStartedData,
    },
    services::PublishingHouse,
};

/// Book aggregate root.
///
/// Owns every piece of the book's mutable state and is the only place
/// where the editorial rules are enforced. Command methods take `&self`,
/// validate all preconditions, and return the events describing the
/// mutation; `apply` folds those events into state. A failed command
/// therefore cannot leave partial state behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    /// Identity, assigned once by `WritingStarted`.
    id: Option<BookId>,

    /// Sequence of the last folded event.
    sequence: Sequence,

    /// Current lifecycle state.
    state: BookState,

    title: Option<Title>,
    author: Option<Author>,
    publisher: Option<Publisher>,
    edition: Option<PositiveInt>,
    genre: Option<Genre>,
    isbn: Option<Isbn>,
    committee_approval: Option<CommitteeApproval>,

    /// Chapters in order, numbered 1..N with no gaps.
    chapters: Vec<Chapter>,

    /// Reviewers, unique by reviewer id.
    reviewers: Vec<Reviewer>,

    /// Translations, at most [`Book::MAX_TRANSLATIONS`].
    translations: Vec<Translation>,

    /// Formats, at most one per format type.
    formats: HashMap<FormatType, Format>,
}

impl Aggregate for Book {
    type Event = BookEvent;
    type Error = BookError;

    fn aggregate_type() -> &'static str {
        "Book"
    }

    fn id(&self) -> Option<AggregateId> {
        self.id.map(Into::into)
    }

    fn sequence(&self) -> Sequence {
        self.sequence
    }

    fn set_sequence(&mut self, sequence: Sequence) {
        self.sequence = sequence;
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            BookEvent::WritingStarted(data) => self.apply_writing_started(data),
            BookEvent::ChapterAdded(data) => self.apply_chapter_added(data),
            BookEvent::MovedToEditing(_) => {
                self.state = BookState::Editing;
            }
            BookEvent::TranslationAdded(data) => self.apply_translation_added(data),
            BookEvent::FormatAdded(data) => self.apply_format_added(data),
            BookEvent::FormatRemoved(data) => self.apply_format_removed(data),
            BookEvent::ReviewerAdded(data) => self.apply_reviewer_added(data),
            BookEvent::ReviewerRemoved(data) => self.apply_reviewer_removed(data),
            BookEvent::Approved(data) => self.apply_approved(data),
            BookEvent::IsbnSet(data) => self.apply_isbn_set(data),
            BookEvent::MovedToPrinting(_) => {
                self.state = BookState::Printing;
            }
            BookEvent::Published(_) => {
                self.state = BookState::Published;
            }
            BookEvent::MovedToOutOfPrint(_) => {
                self.state = BookState::OutOfPrint;
            }
        }
    }
}

// Query methods
impl Book {
    /// Maximum number of translations a book may carry; also the number
    /// required before publication.
    pub const MAX_TRANSLATIONS: usize = 5;

    /// Reviewers required before approval, printing and publication.
    pub const REQUIRED_REVIEWERS: usize = 3;

    /// Returns the book's identity.
    pub fn book_id(&self) -> Option<BookId> {
        self.id
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> BookState {
        self.state
    }

    /// Returns the title.
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Returns the author.
    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    /// Returns the publisher.
    pub fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }

    /// Returns the edition.
    pub fn edition(&self) -> Option<PositiveInt> {
        self.edition
    }

    /// Returns the genre, when set.
    pub fn genre(&self) -> Option<&Genre> {
        self.genre.as_ref()
    }

    /// Returns the ISBN, once assigned.
    pub fn isbn(&self) -> Option<&Isbn> {
        self.isbn.as_ref()
    }

    /// Returns the committee approval, once given.
    pub fn committee_approval(&self) -> Option<&CommitteeApproval> {
        self.committee_approval.as_ref()
    }

    /// Returns the chapters in order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Returns the number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns the reviewers.
    pub fn reviewers(&self) -> &[Reviewer] {
        &self.reviewers
    }

    /// Returns the number of reviewers.
    pub fn reviewer_count(&self) -> usize {
        self.reviewers.len()
    }

    /// Returns the translations.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// Returns the number of translations.
    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Returns the formats.
    pub fn formats(&self) -> impl Iterator<Item = &Format> {
        self.formats.values()
    }

    /// Returns the format of the given type, if present.
    pub fn format(&self, format_type: &FormatType) -> Option<&Format> {
        self.formats.get(format_type)
    }

    /// Returns the number of formats.
    pub fn format_count(&self) -> usize {
        self.formats.len()
    }

    /// Returns true if the book has at least one chapter.
    pub fn has_chapters(&self) -> bool {
        !self.chapters.is_empty()
    }

    /// Returns true if the book is in its terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    fn require_id(&self) -> Result<BookId, BookError> {
        self.id.ok_or(BookError::NotDrafted)
    }
}

// Command methods (return events)
impl Book {
    /// Creates a new draft.
    ///
    /// The genre may be omitted at draft time; moving to editing or
    /// printing later requires it.
    pub fn create_draft(
        &self,
        book_id: BookId,
        title: Title,
        author: Author,
        publisher: Publisher,
        edition: PositiveInt,
        genre: Option<Genre>,
    ) -> Result<Vec<BookEvent>, BookError> {
        if self.id.is_some() {
            return Err(BookError::AlreadyDrafted);
        }

        Ok(vec![BookEvent::writing_started(
            book_id, title, author, publisher, edition, genre,
        )])
    }

    /// Adds a chapter.
    ///
    /// The first chapter may carry any title; from then on chapters must
    /// arrive in sequence, titled "chapter N" for N = count + 1. Titles
    /// are unique within the book no matter the state.
    pub fn add_chapter(
        &self,
        title: ChapterTitle,
        content: ChapterContent,
    ) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if self.chapters.iter().any(|chapter| chapter.title == title) {
            return Err(BookError::DuplicateChapterTitle {
                title: title.as_str().to_string(),
            });
        }

        if !self.chapters.is_empty() {
            let expected = format!("chapter {}", self.chapters.len() + 1);
            if title.as_str() != expected {
                return Err(BookError::ChapterOutOfSequence { expected });
            }
        }

        let number = ChapterNumber::new(self.chapters.len() as i32 + 1)?;
        let chapter = Chapter::new(number, title, content);

        Ok(vec![BookEvent::chapter_added(book_id, chapter)])
    }

    /// Moves the book from writing to editing.
    pub fn move_to_editing(&self) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_move_to_editing() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "move to editing",
            });
        }

        if self.chapters.is_empty() {
            return Err(BookError::NoChapters {
                action: "move to editing",
            });
        }

        if self.genre.is_none() {
            return Err(BookError::MissingGenre {
                action: "move to editing",
            });
        }

        Ok(vec![BookEvent::moved_to_editing(book_id)])
    }

    /// Adds a translation.
    pub fn add_translation(&self, translation: Translation) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "add a translation",
            });
        }

        if self.translations.len() >= Self::MAX_TRANSLATIONS {
            return Err(BookError::TranslationLimitReached {
                limit: Self::MAX_TRANSLATIONS,
            });
        }

        Ok(vec![BookEvent::translation_added(book_id, translation)])
    }

    /// Adds a publication format.
    pub fn add_format(&self, format: Format) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "add a format",
            });
        }

        if self.formats.contains_key(&format.format_type) {
            return Err(BookError::FormatAlreadyExists {
                format_type: format.format_type.as_str().to_string(),
            });
        }

        Ok(vec![BookEvent::format_added(book_id, format)])
    }

    /// Removes the publication format matching the given format's type.
    pub fn remove_format(&self, format: &Format) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "remove a format",
            });
        }

        let Some(existing) = self.formats.get(&format.format_type) else {
            return Err(BookError::FormatNotFound {
                format_type: format.format_type.as_str().to_string(),
            });
        };

        Ok(vec![BookEvent::format_removed(book_id, existing.clone())])
    }

    /// Adds a reviewer to the committee for this book.
    pub fn add_reviewer(&self, reviewer: Reviewer) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "add a reviewer",
            });
        }

        if self.reviewers.iter().any(|r| r.id == reviewer.id) {
            return Err(BookError::ReviewerAlreadyAdded {
                name: reviewer.name.as_str().to_string(),
            });
        }

        Ok(vec![BookEvent::reviewer_added(book_id, reviewer)])
    }

    /// Records the committee's approval.
    pub fn approve(
        &self,
        committee_approval: CommitteeApproval,
    ) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "approve",
            });
        }

        if self.reviewers.len() < Self::REQUIRED_REVIEWERS {
            return Err(BookError::NotEnoughReviewers {
                required: Self::REQUIRED_REVIEWERS,
                actual: self.reviewers.len(),
            });
        }

        Ok(vec![BookEvent::approved(book_id, committee_approval)])
    }

    /// Assigns the ISBN, exactly once.
    pub fn set_isbn(&self, isbn: Isbn) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_edit() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "set the ISBN",
            });
        }

        if self.isbn.is_some() {
            return Err(BookError::IsbnAlreadySet);
        }

        Ok(vec![BookEvent::isbn_set(book_id, isbn)])
    }

    /// Sends the book to the printing house.
    ///
    /// The publishing house capability is looked up per call and never
    /// stored on the aggregate.
    pub fn move_to_printing(
        &self,
        binding_type: NonEmptyString,
        summary: NonEmptyString,
        publishing_house: &dyn PublishingHouse,
    ) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_move_to_printing() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "move to printing",
            });
        }

        if self.chapters.is_empty() {
            return Err(BookError::NoChapters {
                action: "move to printing",
            });
        }

        if self.committee_approval.is_none() {
            return Err(BookError::NotApproved);
        }

        if self.reviewers.len() < Self::REQUIRED_REVIEWERS {
            return Err(BookError::NotEnoughReviewers {
                required: Self::REQUIRED_REVIEWERS,
                actual: self.reviewers.len(),
            });
        }

        let Some(genre) = &self.genre else {
            return Err(BookError::MissingGenre {
                action: "move to printing",
            });
        };

        if publishing_house.is_genre_limit_reached(genre) {
            return Err(BookError::GenreLimitReached {
                genre: genre.as_str().to_string(),
            });
        }

        let page_sum: i32 = self
            .chapters
            .iter()
            .map(|chapter| chapter.content.total_pages().value())
            .sum();
        let illustration_sum: i32 = self
            .chapters
            .iter()
            .map(|chapter| chapter.content.number_of_illustrations().value())
            .sum();

        let total_pages = PositiveInt::new(page_sum)?;
        let number_of_illustrations = NonNegativeInt::new(illustration_sum)?;

        Ok(vec![BookEvent::moved_to_printing(
            book_id,
            total_pages,
            number_of_illustrations,
            binding_type,
            summary,
        )])
    }

    /// Publishes the book.
    pub fn move_to_published(&self, now: NaiveDate) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_move_to_published() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "move to published",
            });
        }

        if self.translations.len() < Self::MAX_TRANSLATIONS {
            return Err(BookError::NotEnoughTranslations {
                required: Self::MAX_TRANSLATIONS,
                actual: self.translations.len(),
            });
        }

        let Some(isbn) = &self.isbn else {
            return Err(BookError::MissingIsbn);
        };

        if self.reviewers.len() < Self::REQUIRED_REVIEWERS {
            return Err(BookError::NotEnoughReviewers {
                required: Self::REQUIRED_REVIEWERS,
                actual: self.reviewers.len(),
            });
        }

        let title = self.title.clone().ok_or(BookError::NotDrafted)?;
        let author = self.author.clone().ok_or(BookError::NotDrafted)?;

        Ok(vec![BookEvent::published(
            book_id,
            isbn.clone(),
            title,
            author,
            now,
        )])
    }

    /// Retires the book.
    ///
    /// Allowed only while at most 10% of the printed copies are sold,
    /// checked with integer arithmetic across all formats. A book with
    /// no formats passes the check.
    pub fn move_to_out_of_print(&self) -> Result<Vec<BookEvent>, BookError> {
        let book_id = self.require_id()?;

        if !self.state.can_move_to_out_of_print() {
            return Err(BookError::InvalidStateTransition {
                current_state: self.state,
                action: "move out of print",
            });
        }

        let total_copies: i64 = self
            .formats
            .values()
            .map(|format| format.total_copies.value() as i64)
            .sum();
        let sold_copies: i64 = self
            .formats
            .values()
            .map(|format| format.sold_copies.value() as i64)
            .sum();

        if sold_copies * 10 > total_copies {
            return Err(BookError::StillSelling);
        }

        Ok(vec![BookEvent::moved_to_out_of_print(book_id)])
    }
}

// Apply event helpers
impl Book {
    fn apply_writing_started(&mut self, data: WritingStartedData) {
        self.id = Some(data.book_id);
        self.state = BookState::Writing;
        self.title = Some(data.title);
        self.author = Some(data.author);
        self.publisher = Some(data.publisher);
        self.edition = Some(data.edition);
        self.genre = data.genre;
    }

    fn apply_chapter_added(&mut self, data: ChapterAddedData) {
        self.chapters.push(data.chapter);
    }

    fn apply_translation_added(&mut self, data: TranslationAddedData) {
        self.translations.push(data.translation);
    }

    fn apply_format_added(&mut self, data: FormatAddedData) {
        self.formats
            .insert(data.format.format_type.clone(), data.format);
    }

    fn apply_format_removed(&mut self, data: FormatRemovedData) {
        self.formats.remove(&data.format.format_type);
    }

    fn apply_reviewer_added(&mut self, data: ReviewerAddedData) {
        self.reviewers.push(data.reviewer);
    }

    fn apply_reviewer_removed(&mut self, data: ReviewerRemovedData) {
        self.reviewers.retain(|r| r.id != data.reviewer.id);
    }

    fn apply_approved(&mut self, data: ApprovedData) {
        self.committee_approval = Some(data.committee_approval);
    }

    fn apply_isbn_set(&mut self, data: IsbnSetData) {
        self.isbn = Some(data.isbn);
    }
}
