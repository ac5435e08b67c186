//! Book commands.

use common::{AggregateId, NonEmptyString, PositiveInt};

use crate::command::Command;

use super::{
    Book, BookId, ChapterTitle, CommitteeApproval, Format, Genre, Isbn, PublisherId, Reviewer,
    Title, Translation, providers::AuthorIdOrData,
};

/// Command to create a new draft.
#[derive(Debug, Clone)]
pub struct CreateDraft {
    /// The identity the new book will carry.
    pub book_id: BookId,

    /// The book's title.
    pub title: Title,

    /// The author, by id or by creation data.
    pub author: AuthorIdOrData,

    /// The publisher's id.
    pub publisher_id: PublisherId,

    /// Which edition this is.
    pub edition: PositiveInt,

    /// The genre, when already known.
    pub genre: Option<Genre>,
}

impl CreateDraft {
    /// Creates a new CreateDraft command.
    pub fn new(
        book_id: BookId,
        title: Title,
        author: AuthorIdOrData,
        publisher_id: PublisherId,
        edition: PositiveInt,
        genre: Option<Genre>,
    ) -> Self {
        Self {
            book_id,
            title,
            author,
            publisher_id,
            edition,
            genre,
        }
    }

    /// Creates a CreateDraft command with a generated book id.
    pub fn for_new_book(
        title: Title,
        author: AuthorIdOrData,
        publisher_id: PublisherId,
        edition: PositiveInt,
        genre: Option<Genre>,
    ) -> Self {
        Self::new(BookId::new(), title, author, publisher_id, edition, genre)
    }
}

impl Command for CreateDraft {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to add a chapter.
#[derive(Debug, Clone)]
pub struct AddChapter {
    /// The book to extend.
    pub book_id: BookId,

    /// The chapter's title.
    pub title: ChapterTitle,

    /// The chapter's raw text; the service analyzes it into content.
    pub text: String,
}

impl AddChapter {
    /// Creates a new AddChapter command.
    pub fn new(book_id: BookId, title: ChapterTitle, text: impl Into<String>) -> Self {
        Self {
            book_id,
            title,
            text: text.into(),
        }
    }
}

impl Command for AddChapter {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to move a book to editing.
#[derive(Debug, Clone)]
pub struct MoveToEditing {
    /// The book to move.
    pub book_id: BookId,
}

impl MoveToEditing {
    /// Creates a new MoveToEditing command.
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}

impl Command for MoveToEditing {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to add a translation.
#[derive(Debug, Clone)]
pub struct AddTranslation {
    /// The book being translated.
    pub book_id: BookId,

    /// The translation to add.
    pub translation: Translation,
}

impl AddTranslation {
    /// Creates a new AddTranslation command.
    pub fn new(book_id: BookId, translation: Translation) -> Self {
        Self {
            book_id,
            translation,
        }
    }
}

impl Command for AddTranslation {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to add a publication format.
#[derive(Debug, Clone)]
pub struct AddFormat {
    /// The book to extend.
    pub book_id: BookId,

    /// The format to add.
    pub format: Format,
}

impl AddFormat {
    /// Creates a new AddFormat command.
    pub fn new(book_id: BookId, format: Format) -> Self {
        Self { book_id, format }
    }
}

impl Command for AddFormat {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to remove a publication format.
#[derive(Debug, Clone)]
pub struct RemoveFormat {
    /// The book to shrink.
    pub book_id: BookId,

    /// The format whose type identifies what to remove.
    pub format: Format,
}

impl RemoveFormat {
    /// Creates a new RemoveFormat command.
    pub fn new(book_id: BookId, format: Format) -> Self {
        Self { book_id, format }
    }
}

impl Command for RemoveFormat {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to add a reviewer.
#[derive(Debug, Clone)]
pub struct AddReviewer {
    /// The book under review.
    pub book_id: BookId,

    /// The reviewer to add.
    pub reviewer: Reviewer,
}

impl AddReviewer {
    /// Creates a new AddReviewer command.
    pub fn new(book_id: BookId, reviewer: Reviewer) -> Self {
        Self { book_id, reviewer }
    }
}

impl Command for AddReviewer {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to record the committee's approval.
#[derive(Debug, Clone)]
pub struct Approve {
    /// The book being approved.
    pub book_id: BookId,

    /// The committee's sign-off.
    pub committee_approval: CommitteeApproval,
}

impl Approve {
    /// Creates a new Approve command.
    pub fn new(book_id: BookId, committee_approval: CommitteeApproval) -> Self {
        Self {
            book_id,
            committee_approval,
        }
    }
}

impl Command for Approve {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to assign the ISBN.
#[derive(Debug, Clone)]
pub struct SetIsbn {
    /// The book to label.
    pub book_id: BookId,

    /// The ISBN to assign.
    pub isbn: Isbn,
}

impl SetIsbn {
    /// Creates a new SetIsbn command.
    pub fn new(book_id: BookId, isbn: Isbn) -> Self {
        Self { book_id, isbn }
    }
}

impl Command for SetIsbn {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to send a book to printing.
#[derive(Debug, Clone)]
pub struct MoveToPrinting {
    /// The book to print.
    pub book_id: BookId,

    /// The chosen binding.
    pub binding_type: NonEmptyString,

    /// The marketing summary.
    pub summary: NonEmptyString,
}

impl MoveToPrinting {
    /// Creates a new MoveToPrinting command.
    pub fn new(book_id: BookId, binding_type: NonEmptyString, summary: NonEmptyString) -> Self {
        Self {
            book_id,
            binding_type,
            summary,
        }
    }
}

impl Command for MoveToPrinting {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to publish a book.
#[derive(Debug, Clone)]
pub struct MoveToPublished {
    /// The book to publish.
    pub book_id: BookId,
}

impl MoveToPublished {
    /// Creates a new MoveToPublished command.
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}

impl Command for MoveToPublished {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

/// Command to retire a book.
#[derive(Debug, Clone)]
pub struct MoveToOutOfPrint {
    /// The book to retire.
    pub book_id: BookId,
}

impl MoveToOutOfPrint {
    /// Creates a new MoveToOutOfPrint command.
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}

impl Command for MoveToOutOfPrint {
    type Aggregate = Book;

    fn aggregate_id(&self) -> AggregateId {
        self.book_id.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{FormatType, ReviewerId};
    use common::{NonNegativeInt, PositiveInt};

    #[test]
    fn create_draft_command_targets_its_book() {
        let cmd = CreateDraft::for_new_book(
            Title::new("Solaris Revisited").unwrap(),
            AuthorIdOrData::Data {
                name: NonEmptyString::new("Teodor Lem").unwrap(),
            },
            PublisherId::new(),
            PositiveInt::new(1).unwrap(),
            Some(Genre::new("Fiction").unwrap()),
        );
        assert_eq!(cmd.aggregate_id(), AggregateId::from(cmd.book_id));
    }

    #[test]
    fn add_chapter_command_carries_raw_text() {
        let book_id = BookId::new();
        let cmd = AddChapter::new(
            book_id,
            ChapterTitle::new("chapter 1").unwrap(),
            "It was a dark and stormy night.",
        );
        assert_eq!(cmd.aggregate_id(), AggregateId::from(book_id));
        assert_eq!(cmd.text, "It was a dark and stormy night.");
    }

    #[test]
    fn remove_format_command_identifies_by_type() {
        let book_id = BookId::new();
        let format = Format::new(
            FormatType::new("Paperback").unwrap(),
            PositiveInt::new(100).unwrap(),
            NonNegativeInt::zero(),
        );
        let cmd = RemoveFormat::new(book_id, format);
        assert_eq!(cmd.format.format_type.as_str(), "Paperback");
    }

    #[test]
    fn add_reviewer_command_carries_the_reviewer() {
        let book_id = BookId::new();
        let reviewer = Reviewer::new(ReviewerId::new(), "Jane Doe").unwrap();
        let cmd = AddReviewer::new(book_id, reviewer.clone());
        assert_eq!(cmd.aggregate_id(), AggregateId::from(book_id));
        assert_eq!(cmd.reviewer, reviewer);
    }
}
