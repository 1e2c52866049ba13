//! Keyboard contract between a front end and the controller

/// A keypress, reduced to what the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Any other key; always ignored
    Other,
}

impl Key {
    /// Keys for typing `text` character by character
    ///
    /// # Examples
    /// ```
    /// use wordle_game::session::Key;
    ///
    /// let keys: Vec<Key> = Key::typed("ab").collect();
    /// assert_eq!(keys, vec![Key::Char('a'), Key::Char('b')]);
    /// ```
    pub fn typed(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars().map(Self::Char)
    }
}
