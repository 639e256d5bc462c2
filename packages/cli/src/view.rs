//! Terminal rendering of the auth wizard

use std::collections::HashMap;

use colored::Colorize;
use console::Term;
use storefront_core::{Field, FormValues, Step, StepView};
use tracing::debug;

/// Wizard view that prints steps to the terminal and keeps what the user typed
pub struct TerminalView {
    term: Term,
    visible: Step,
    messages: HashMap<Step, String>,
    values: FormValues,
    busy: Option<Step>,
}

impl TerminalView {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            visible: Step::Identify,
            messages: HashMap::new(),
            values: FormValues::default(),
            busy: None,
        }
    }

    pub fn visible(&self) -> Step {
        self.visible
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Store what the user entered for `field`
    pub fn enter(&mut self, field: Field, value: &str) {
        self.values.set(field, value);
    }
}

impl StepView for TerminalView {
    fn show(&mut self, step: Step) {
        self.visible = step;

        println!();
        println!(
            "{} {}",
            format!("[{}/4]", step.number()).bright_cyan().bold(),
            step.title().bold()
        );
        if let Some(message) = self.messages.get(&step).filter(|m| !m.is_empty()) {
            println!("   {}", message.dimmed());
        }
    }

    fn set_message(&mut self, step: Step, text: &str) {
        self.messages.insert(step, text.to_string());
    }

    fn form_values(&self, _step: Step) -> FormValues {
        self.values.clone()
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.values.set(field, value);
    }

    fn set_busy(&mut self, step: Step, busy: bool) {
        if busy {
            self.busy = Some(step);
            if let Err(e) = self.term.write_line(&step.pending_label().dimmed().to_string()) {
                debug!(error = %e, "could not print pending line");
            }
        } else if self.busy == Some(step) {
            self.busy = None;
            if let Err(e) = self.term.clear_last_lines(1) {
                debug!(error = %e, "could not clear pending line");
            }
        }
    }

    fn reset(&mut self) {
        self.messages.clear();
        self.values = FormValues::default();
        self.busy = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_entries() {
        let mut view = TerminalView::new(Term::stdout());
        view.enter(Field::Identifier, "user@example.com");
        view.set_message(Step::Verify, "code sent");

        view.reset();

        assert_eq!(view.value(Field::Identifier), "");
        assert!(view.messages.is_empty());
    }

    #[test]
    fn test_prefill_is_visible_to_prompts() {
        let mut view = TerminalView::new(Term::stdout());
        view.set_field(Field::Phone, "+15551234567");
        assert_eq!(view.value(Field::Phone), "+15551234567");
        assert_eq!(view.form_values(Step::Register).phone, "+15551234567");
    }

    #[test]
    fn test_busy_line_survives_non_terminal_output() {
        let mut view = TerminalView::new(Term::buffered_stdout());
        view.set_busy(Step::Password, true);
        assert_eq!(view.busy, Some(Step::Password));

        view.set_busy(Step::Identify, false);
        assert_eq!(view.busy, Some(Step::Password), "other steps leave it alone");

        view.set_busy(Step::Password, false);
        assert_eq!(view.busy, None);
    }
}
