//! Capabilities the wizard needs from whatever renders it

use super::Step;
use crate::notification::NotificationKind;

/// Values typed into the wizard's forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub identifier: String,
    pub password: String,
    pub code: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
            Field::Code => &self.code,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Identifier => &mut self.identifier,
            Field::Password => &mut self.password,
            Field::Code => &mut self.code,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.to_string();
    }
}

/// An input in one of the wizard's forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Identifier,
    Password,
    Code,
    Username,
    Email,
    Phone,
}

impl Field {
    /// The step whose form holds this field
    pub fn step(&self) -> Step {
        match self {
            Field::Identifier => Step::Identify,
            Field::Password => Step::Password,
            Field::Code => Step::Verify,
            Field::Username | Field::Email | Field::Phone => Step::Register,
        }
    }
}

/// Rendering side of the wizard.
///
/// The controller never touches markup; it only asks the view to show a step,
/// put text on it, read its form, pre-fill an input, and toggle the step's
/// submit control.
pub trait StepView {
    /// Make `step` the only visible step
    fn show(&mut self, step: Step);

    /// Set the informational text displayed on `step`
    fn set_message(&mut self, step: Step, text: &str);

    /// Current values of `step`'s form. Fields outside that form may be left empty.
    fn form_values(&self, step: Step) -> FormValues;

    fn set_field(&mut self, field: Field, value: &str);

    /// Disable (`true`) or re-enable (`false`) the submit control of `step`
    fn set_busy(&mut self, step: Step, busy: bool);

    /// Clear every form and message, re-enable every control
    fn reset(&mut self);
}

/// Sink for transient user-facing notifications
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}
