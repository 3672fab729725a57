//! Keyboard and paste handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') => {
                    self.submit_for_analysis();
                    return;
                }
                KeyCode::Char('s') => {
                    self.submit_for_suggestion();
                    return;
                }
                KeyCode::Char('t') => {
                    self.next_strategy();
                    return;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus_results(),
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Enter => self.input.insert_char('\n'),
            KeyCode::Tab => self.input.insert_str("  "),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Up => self.input.move_up(),
            KeyCode::Down => self.input.move_down(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('i') | KeyCode::Char('e') => self.focus_input(),
            KeyCode::Char('a') => self.submit_for_analysis(),
            KeyCode::Char('s') => self.submit_for_suggestion(),
            KeyCode::Char('c') => self.input.clear(),
            KeyCode::Char('x') => self.dismiss_banner(),
            KeyCode::Tab | KeyCode::Char(']') => self.next_strategy(),
            KeyCode::BackTab | KeyCode::Char('[') => self.previous_strategy(),
            KeyCode::Down | KeyCode::Char('j') => self.next_card(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_card(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_expanded(),
            KeyCode::Esc => self.collapse(),
            _ => {}
        }
    }

    /// Bracketed paste always lands in the input pane
    pub fn handle_paste(&mut self, text: &str) {
        self.focus = Focus::Input;
        self.expanded_card = None;
        self.input.insert_str(text);
    }
}
