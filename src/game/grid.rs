//! Attempt grid and cursor

use crate::core::{Feedback, LetterState, WORD_LENGTH, Word};

/// Current write position for live typing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// One square of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<u8>,
    state: Option<LetterState>,
}

impl Cell {
    /// Typed letter, lowercase
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter.map(char::from)
    }

    /// Feedback category, set once the row is submitted
    #[must_use]
    pub const fn state(&self) -> Option<LetterState> {
        self.state
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// One attempt, `WORD_LENGTH` cells wide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Letters of a completely filled row
    #[must_use]
    pub fn letters(&self) -> Option<[u8; WORD_LENGTH]> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.cells) {
            *slot = cell.letter?;
        }
        Some(letters)
    }

    /// Typed letters so far, in order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(Cell::letter).collect()
    }

    /// Feedback of a submitted row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        for (slot, cell) in states.iter_mut().zip(&self.cells) {
            *slot = cell.state?;
        }
        Some(Feedback::new(states))
    }

    /// Guess and feedback of a submitted row
    #[must_use]
    pub fn evaluation(&self) -> Option<(Word, Feedback)> {
        let feedback = self.feedback()?;
        let guess = Word::from_letters(self.letters()?).ok()?;
        Some((guess, feedback))
    }

    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.cells.iter().all(|cell| cell.state.is_some())
    }

    pub(crate) fn set_letter(&mut self, col: usize, letter: u8) {
        self.cells[col].letter = Some(letter);
    }

    pub(crate) fn clear_letter(&mut self, col: usize) {
        self.cells[col].letter = None;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::default(); WORD_LENGTH];
    }

    pub(crate) fn apply_feedback(&mut self, feedback: &Feedback) {
        for (cell, &state) in self.cells.iter_mut().zip(feedback.states()) {
            cell.state = Some(state);
        }
    }
}

/// All rows of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: vec![Row::default(); rows],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// # Panics
    /// Panics if `index` is out of range
    #[must_use]
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    /// Submitted rows in order, with their guess and feedback
    pub fn evaluations(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.rows.iter().filter_map(Row::evaluation)
    }

    /// Number of submitted rows
    #[must_use]
    pub fn evaluated_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_evaluated()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(word: &str) -> Row {
        let mut row = Row::default();
        for (col, letter) in word.bytes().enumerate() {
            row.set_letter(col, letter);
        }
        row
    }

    #[test]
    fn empty_row_has_no_letters() {
        let row = Row::default();
        assert_eq!(row.letters(), None);
        assert_eq!(row.text(), "");
        assert!(row.cells().iter().all(Cell::is_empty));
        assert!(!row.is_evaluated());
    }

    #[test]
    fn partial_row_is_not_a_guess() {
        let mut row = Row::default();
        row.set_letter(0, b'a');
        row.set_letter(1, b'p');
        assert_eq!(row.letters(), None);
        assert_eq!(row.text(), "ap");
    }

    #[test]
    fn full_row_letters() {
        let row = filled("apple");
        assert_eq!(row.letters(), Some(*b"apple"));
        assert_eq!(row.feedback(), None);
        assert_eq!(row.evaluation(), None);
    }

    #[test]
    fn evaluated_row() {
        let mut row = filled("paper");
        let guess = Word::new("paper").unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new("apple").unwrap());
        row.apply_feedback(&feedback);

        assert!(row.is_evaluated());
        assert_eq!(row.feedback(), Some(feedback));
        assert_eq!(row.evaluation(), Some((guess, feedback)));
        assert_eq!(row.cells()[2].state(), Some(LetterState::Correct));
        assert_eq!(row.cells()[2].letter(), Some('p'));
    }

    #[test]
    fn clear_letter_and_clear() {
        let mut row = filled("apple");
        row.clear_letter(4);
        assert_eq!(row.text(), "appl");
        row.clear();
        assert_eq!(row, Row::default());
    }

    #[test]
    fn grid_counts_evaluations() {
        let mut grid = Grid::new(6);
        assert_eq!(grid.rows().len(), 6);
        assert_eq!(grid.evaluated_count(), 0);

        let feedback = Feedback::PERFECT;
        *grid.row_mut(0) = filled("apple");
        grid.row_mut(0).apply_feedback(&feedback);

        assert_eq!(grid.evaluated_count(), 1);
        let evaluations: Vec<_> = grid.evaluations().collect();
        assert_eq!(evaluations, vec![(Word::new("apple").unwrap(), feedback)]);
    }
}
