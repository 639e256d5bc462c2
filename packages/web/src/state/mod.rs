//! Global state management
//!
//! Everything here is created once in the root component, so it outlives the
//! auth modal and any request still in flight when the modal closes.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use storefront_core::{
    AuthWizard, ClientTransport, Field, FormValues, Locale, NotificationCenter, NotificationKind,
    Notifier, Session, Step, StepView, StorefrontApi,
};
use uuid::Uuid;

/// Signals behind the auth modal's markup
#[derive(Clone, Copy)]
pub struct WizardView {
    pub visible: Signal<Step>,
    pub messages: Signal<HashMap<Step, String>>,
    pub values: Signal<FormValues>,
    pub busy: Signal<HashSet<Step>>,
}

impl WizardView {
    pub fn new() -> Self {
        Self {
            visible: Signal::new(Step::Identify),
            messages: Signal::new(HashMap::new()),
            values: Signal::new(FormValues::default()),
            busy: Signal::new(HashSet::new()),
        }
    }

    pub fn is_busy(&self, step: Step) -> bool {
        self.busy.read().contains(&step)
    }

    pub fn message(&self, step: Step) -> String {
        self.messages.read().get(&step).cloned().unwrap_or_default()
    }

    pub fn value(&self, field: Field) -> String {
        self.values.read().get(field).to_string()
    }

    /// Record a keystroke in one of the forms
    pub fn input(&mut self, field: Field, value: String) {
        self.values.write().set(field, &value);
    }
}

impl StepView for WizardView {
    fn show(&mut self, step: Step) {
        self.visible.set(step);
    }

    fn set_message(&mut self, step: Step, text: &str) {
        self.messages.write().insert(step, text.to_string());
    }

    fn form_values(&self, _step: Step) -> FormValues {
        self.values.peek().clone()
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.values.write().set(field, value);
    }

    fn set_busy(&mut self, step: Step, busy: bool) {
        if busy {
            self.busy.write().insert(step);
        } else {
            self.busy.write().remove(&step);
        }
    }

    fn reset(&mut self) {
        self.messages.write().clear();
        self.values.set(FormValues::default());
        self.busy.write().clear();
    }
}

/// Toast stack with auto-dismiss
#[derive(Clone, Copy)]
pub struct Toasts {
    pub center: Signal<NotificationCenter>,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            center: Signal::new(NotificationCenter::new(ttl)),
        }
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.center.write().dismiss(id);
    }

    fn prune_expired(&mut self) {
        self.center.write().prune_expired();
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.center.write().push(kind, message);
        let ttl = self.center.peek().ttl();
        let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);

        let mut toasts = *self;
        spawn_forever(async move {
            TimeoutFuture::new(millis).await;
            toasts.prune_expired();
        });
    }
}

/// Application state shared through context
#[derive(Clone)]
pub struct AppState {
    pub api: StorefrontApi<ClientTransport>,
    pub locale: Locale,
    pub wizard: Signal<AuthWizard>,
    pub view: WizardView,
    pub toasts: Toasts,
    pub session: Signal<Session>,
}

impl AppState {
    pub fn new(api: StorefrontApi<ClientTransport>, locale: Locale, toast_ttl: Duration) -> Self {
        Self {
            api,
            locale,
            wizard: Signal::new(AuthWizard::new()),
            view: WizardView::new(),
            toasts: Toasts::new(toast_ttl),
            session: Signal::new(Session::default()),
        }
    }

    pub fn open_wizard(&self) {
        let mut view = self.view;
        let mut wizard = self.wizard;
        wizard.write().open(&mut view);
    }

    pub fn close_wizard(&self) {
        let mut view = self.view;
        let mut wizard = self.wizard;
        wizard.write().close(&mut view);
    }

    pub fn sign_out(&self) {
        let mut session = self.session;
        let mut toasts = self.toasts;
        let message = session.write().sign_out();
        toasts.notify(NotificationKind::Success, message);
    }
}

/// Hook to access the application state
pub fn use_app() -> AppState {
    use_context::<AppState>()
}
