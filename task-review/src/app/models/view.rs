//! Which pane receives key presses

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the task JSON editor
    Input,
    /// Browsing the result cards
    Results,
}
