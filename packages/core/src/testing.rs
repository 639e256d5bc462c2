//! Test doubles for the wizard's seams.
//!
//! Available with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! storefront-core = { path = "../core", features = ["testing"] }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{Endpoint, Transport};
use crate::error::{ClientError, ClientResult};
use crate::notification::NotificationKind;
use crate::wizard::{Field, FormValues, Notifier, Step, StepView};

/// Transport that answers from queued replies and records every request
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<Endpoint, VecDeque<Result<Value, String>>>>,
    requests: RefCell<Vec<(Endpoint, Option<Value>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body for the next call to `endpoint`
    pub fn reply(self, endpoint: Endpoint, body: Value) -> Self {
        self.push(endpoint, Ok(body));
        self
    }

    /// Queue a transport failure for the next call to `endpoint`
    pub fn fail(self, endpoint: Endpoint, reason: &str) -> Self {
        self.push(endpoint, Err(reason.to_string()));
        self
    }

    pub fn push(&self, endpoint: Endpoint, reply: Result<Value, String>) {
        self.replies
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<(Endpoint, Option<Value>)> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn fetch_json(&self, endpoint: Endpoint, body: Option<Value>) -> ClientResult<Value> {
        self.requests.borrow_mut().push((endpoint, body));

        let next = self
            .replies
            .borrow_mut()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Ok(value)) => Ok(value),
            Some(Err(reason)) => Err(ClientError::Unavailable(reason)),
            None => Err(ClientError::Unavailable(format!(
                "no scripted reply for {}",
                endpoint.path()
            ))),
        }
    }
}

/// View that keeps everything the controller told it
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub visible: Step,
    pub shown: Vec<Step>,
    pub messages: HashMap<Step, String>,
    pub fields: FormValues,
    pub busy: HashSet<Step>,
    /// Every `set_busy` call, in order
    pub busy_log: Vec<(Step, bool)>,
    pub resets: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into an input
    pub fn type_into(&mut self, field: Field, value: &str) {
        self.fields.set(field, value);
    }

    pub fn message(&self, step: Step) -> Option<&str> {
        self.messages.get(&step).map(String::as_str)
    }
}

impl StepView for RecordingView {
    fn show(&mut self, step: Step) {
        self.visible = step;
        self.shown.push(step);
    }

    fn set_message(&mut self, step: Step, text: &str) {
        self.messages.insert(step, text.to_string());
    }

    fn form_values(&self, _step: Step) -> FormValues {
        self.fields.clone()
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.fields.set(field, value);
    }

    fn set_busy(&mut self, step: Step, busy: bool) {
        if busy {
            self.busy.insert(step);
        } else {
            self.busy.remove(&step);
        }
        self.busy_log.push((step, busy));
    }

    fn reset(&mut self) {
        self.messages.clear();
        self.fields = FormValues::default();
        self.busy.clear();
        self.resets += 1;
    }
}

/// Notifier that collects notifications
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<(NotificationKind, String)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<(NotificationKind, &str)> {
        self.notifications
            .last()
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notifications.push((kind, message.to_string()));
    }
}
