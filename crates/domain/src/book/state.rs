//! Book lifecycle state machine.

use serde::{Deserialize, Serialize};

/// The state of a book in its editorial lifecycle.
///
/// Transitions move strictly forward:
/// ```text
/// Writing ──► Editing ──► Printing ──► Published ──► OutOfPrint
/// ```
/// No transition skips a state and none goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookState {
    /// The draft is being written; chapters accumulate here.
    #[default]
    Writing,

    /// Editorial work: translations, formats, reviewers, approval, ISBN.
    Editing,

    /// The book is at the printing house.
    Printing,

    /// The book is on the market.
    Published,

    /// The book has been retired (terminal state).
    OutOfPrint,
}

impl BookState {
    /// Returns true if the book can move to editing from this state.
    pub fn can_move_to_editing(&self) -> bool {
        matches!(self, BookState::Writing)
    }

    /// Returns true if editorial work (translations, formats, reviewers,
    /// approval, ISBN) can happen in this state.
    pub fn can_edit(&self) -> bool {
        matches!(self, BookState::Editing)
    }

    /// Returns true if the book can move to printing from this state.
    pub fn can_move_to_printing(&self) -> bool {
        matches!(self, BookState::Editing)
    }

    /// Returns true if the book can be published from this state.
    pub fn can_move_to_published(&self) -> bool {
        matches!(self, BookState::Printing)
    }

    /// Returns true if the book can be retired from this state.
    pub fn can_move_to_out_of_print(&self) -> bool {
        matches!(self, BookState::Published)
    }

    /// Returns true if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookState::OutOfPrint)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookState::Writing => "Writing",
            BookState::Editing => "Editing",
            BookState::Printing => "Printing",
            BookState::Published => "Published",
            BookState::OutOfPrint => "OutOfPrint",
        }
    }
}

impl std::fmt::Display for BookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_writing() {
        assert_eq!(BookState::default(), BookState::Writing);
    }

    #[test]
    fn only_writing_can_move_to_editing() {
        assert!(BookState::Writing.can_move_to_editing());
        assert!(!BookState::Editing.can_move_to_editing());
        assert!(!BookState::Printing.can_move_to_editing());
        assert!(!BookState::Published.can_move_to_editing());
        assert!(!BookState::OutOfPrint.can_move_to_editing());
    }

    #[test]
    fn only_editing_allows_editorial_work() {
        assert!(!BookState::Writing.can_edit());
        assert!(BookState::Editing.can_edit());
        assert!(!BookState::Printing.can_edit());
        assert!(!BookState::Published.can_edit());
        assert!(!BookState::OutOfPrint.can_edit());
    }

    #[test]
    fn only_editing_can_move_to_printing() {
        assert!(!BookState::Writing.can_move_to_printing());
        assert!(BookState::Editing.can_move_to_printing());
        assert!(!BookState::Printing.can_move_to_printing());
        assert!(!BookState::Published.can_move_to_printing());
        assert!(!BookState::OutOfPrint.can_move_to_printing());
    }

    #[test]
    fn only_printing_can_move_to_published() {
        assert!(!BookState::Writing.can_move_to_published());
        assert!(!BookState::Editing.can_move_to_published());
        assert!(BookState::Printing.can_move_to_published());
        assert!(!BookState::Published.can_move_to_published());
        assert!(!BookState::OutOfPrint.can_move_to_published());
    }

    #[test]
    fn only_published_can_move_to_out_of_print() {
        assert!(!BookState::Writing.can_move_to_out_of_print());
        assert!(!BookState::Editing.can_move_to_out_of_print());
        assert!(!BookState::Printing.can_move_to_out_of_print());
        assert!(BookState::Published.can_move_to_out_of_print());
        assert!(!BookState::OutOfPrint.can_move_to_out_of_print());
    }

    #[test]
    fn out_of_print_is_terminal() {
        assert!(!BookState::Writing.is_terminal());
        assert!(!BookState::Editing.is_terminal());
        assert!(!BookState::Printing.is_terminal());
        assert!(!BookState::Published.is_terminal());
        assert!(BookState::OutOfPrint.is_terminal());
    }

    #[test]
    fn display_matches_variant_names() {
        assert_eq!(BookState::Writing.to_string(), "Writing");
        assert_eq!(BookState::OutOfPrint.to_string(), "OutOfPrint");
    }

    #[test]
    fn state_serialization_roundtrip() {
        let state = BookState::Printing;
        let json = serde_json::to_string(&state).unwrap();
        let back: BookState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
