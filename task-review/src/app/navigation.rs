//! Card selection and strategy selector movement

use super::*;

impl App {
    fn card_count(&self) -> usize {
        self.review
            .as_ref()
            .map(|review| review.view.cards().len())
            .unwrap_or(0)
    }

    pub fn next_card(&mut self) {
        if self.selected_card < self.card_count().saturating_sub(1) {
            self.selected_card += 1;
        }
    }

    pub fn previous_card(&mut self) {
        if self.selected_card > 0 {
            self.selected_card -= 1;
        }
    }

    /// Open or close the detail view of the selected card
    pub fn toggle_expanded(&mut self) {
        if self.card_count() == 0 {
            return;
        }
        self.expanded_card = match self.expanded_card {
            Some(idx) if idx == self.selected_card => None,
            _ => Some(self.selected_card),
        };
    }

    pub fn collapse(&mut self) {
        self.expanded_card = None;
    }

    pub fn next_strategy(&mut self) {
        self.strategy = self.strategy.next();
    }

    pub fn previous_strategy(&mut self) {
        self.strategy = self.strategy.previous();
    }

    pub fn focus_input(&mut self) {
        self.expanded_card = None;
        self.focus = Focus::Input;
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::Results;
    }

    /// Hide the banner before its clock runs out
    pub fn dismiss_banner(&mut self) {
        if let Some(id) = self.notifications.get_active().map(|n| n.id) {
            self.notifications.dismiss(id);
        }
    }
}
