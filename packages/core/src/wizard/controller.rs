//! Authentication wizard controller
//!
//! Submitting a step happens in three parts:
//!
//! 1. [`AuthWizard::begin`] reads the step's form, disables its control and
//!    builds the request (synchronous).
//! 2. The caller sends the request ([`PendingSubmit::send`]).
//! 3. [`AuthWizard::complete`] re-enables the control and applies the reply
//!    (synchronous).
//!
//! Keeping the network call outside the controller lets a UI hold the
//! controller in shared state without borrowing it across an await. Callers
//! that own the controller outright can use [`AuthWizard::submit`].

use tracing::{debug, info, warn};

use super::state::{Step, WizardState};
use super::view::{Field, Notifier, StepView};
use crate::api::{
    AuthReply, AuthRequest, CheckRequest, LoginRequest, RegisterRequest, StorefrontApi,
    Transport, VerifyRequest,
};
use crate::error::ClientResult;
use crate::identifier::IdentifierKind;
use crate::notification::NotificationKind;

/// Result of a wizard action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Moved to another step
    Advanced(Step),
    /// Still on this step (validation error, rejection or transport failure)
    Stayed(Step),
    /// Login or registration succeeded; the wizard has closed itself
    Authenticated { display_name: String },
    /// Nothing happened: the wizard is closed or the step is already busy
    Ignored,
    /// A reply arrived for a step or modal session that is no longer current
    Discarded,
}

/// What [`AuthWizard::begin`] decided
#[derive(Debug)]
pub enum Submission {
    /// Send this request, then hand the result to [`AuthWizard::complete`]
    Ready(PendingSubmit),
    /// Finished without a network call
    Finished(Outcome),
}

/// A request started by [`AuthWizard::begin`] and not yet completed
#[derive(Debug, Clone)]
#[must_use = "a pending submission keeps its step disabled until completed"]
pub struct PendingSubmit {
    step: Step,
    epoch: u64,
    ticket: u64,
    request: AuthRequest,
}

impl PendingSubmit {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn request(&self) -> &AuthRequest {
        &self.request
    }

    pub async fn send<T: Transport>(&self, api: &StorefrontApi<T>) -> ClientResult<AuthReply> {
        api.send(&self.request).await
    }
}

/// Controller for the four-step sign-in / sign-up flow
#[derive(Debug, Clone, Default)]
pub struct AuthWizard {
    state: WizardState,
}

impl AuthWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Open the modal on a fresh first step
    pub fn open<V: StepView>(&mut self, view: &mut V) {
        self.state.reset(true);
        view.reset();
        view.show(Step::Identify);
        debug!(epoch = self.state.epoch, "auth wizard opened");
    }

    /// Close the modal. Replies still in flight will be discarded.
    pub fn close<V: StepView>(&mut self, view: &mut V) {
        self.state.reset(false);
        view.reset();
        view.show(Step::Identify);
        debug!(epoch = self.state.epoch, "auth wizard closed");
    }

    /// Return to the first step, keeping everything typed so far.
    /// Refused while the current step has a request in flight.
    pub fn back<V: StepView>(&mut self, view: &mut V) -> Outcome {
        let step = self.state.step;
        if !self.state.open || step == Step::Identify || self.state.is_busy(step) {
            return Outcome::Ignored;
        }
        self.show(view, Step::Identify);
        Outcome::Advanced(Step::Identify)
    }

    /// Password recovery is handled out of band; just tell the user.
    pub fn forgot_password<N: Notifier>(&self, notifier: &mut N) {
        notifier.notify(
            NotificationKind::Info,
            "A password recovery link has been sent",
        );
    }

    /// Validate the current step and prepare its request
    pub fn begin<V: StepView, N: Notifier>(&mut self, view: &mut V, notifier: &mut N) -> Submission {
        let step = self.state.step;
        if !self.state.open || self.state.is_busy(step) {
            return Submission::Finished(Outcome::Ignored);
        }

        let request = match self.build_request(step, view) {
            Ok(request) => request,
            Err(problem) => {
                notifier.notify(NotificationKind::Error, problem);
                return Submission::Finished(Outcome::Stayed(step));
            }
        };

        let ticket = self.state.mark_busy(step);
        view.set_busy(step, true);
        debug!(step = step.number(), ticket, "submitting step");

        Submission::Ready(PendingSubmit {
            step,
            epoch: self.state.epoch,
            ticket,
            request,
        })
    }

    /// Apply the result of a request started with [`begin`](Self::begin)
    pub fn complete<V: StepView, N: Notifier>(
        &mut self,
        pending: PendingSubmit,
        result: ClientResult<AuthReply>,
        view: &mut V,
        notifier: &mut N,
    ) -> Outcome {
        let step = pending.step;

        if self.state.release(step, pending.ticket) {
            view.set_busy(step, false);
        }

        if pending.epoch != self.state.epoch || !self.state.open || self.state.step != step {
            debug!(step = step.number(), "discarding reply for a step that is no longer shown");
            return Outcome::Discarded;
        }

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(step = step.number(), error = %e, "auth request failed");
                notifier.notify(NotificationKind::Error, step.failure_message());
                return Outcome::Stayed(step);
            }
        };

        match pending.request {
            AuthRequest::Check(_) => {
                let next = if reply.accepted {
                    Step::Password
                } else {
                    Step::Verify
                };
                view.set_message(next, &reply.message);
                self.show(view, next);
                Outcome::Advanced(next)
            }
            AuthRequest::Login(request) if reply.accepted => {
                notify_success(notifier, &reply, "Signed in successfully");
                let display_name = request.email_or_phone;
                self.close(view);
                info!("login succeeded");
                Outcome::Authenticated { display_name }
            }
            AuthRequest::Verify(request) if reply.accepted => {
                notify_success(notifier, &reply, "Code verified");
                self.state.pending_code = request.code;

                let (email, phone) = IdentifierKind::split(&self.state.identifier);
                view.set_field(Field::Email, &email);
                view.set_field(Field::Phone, &phone);
                self.show(view, Step::Register);
                Outcome::Advanced(Step::Register)
            }
            AuthRequest::Register(request) if reply.accepted => {
                notify_success(notifier, &reply, "Your account has been created");
                self.close(view);
                info!(username = %request.username, "registration succeeded");
                Outcome::Authenticated {
                    display_name: request.username,
                }
            }
            AuthRequest::Login(_) | AuthRequest::Verify(_) | AuthRequest::Register(_) => {
                let message = if reply.message.trim().is_empty() {
                    step.failure_message()
                } else {
                    reply.message.as_str()
                };
                notifier.notify(NotificationKind::Error, message);
                Outcome::Stayed(step)
            }
        }
    }

    /// Submit the current step and wait for the reply
    pub async fn submit<T, V, N>(
        &mut self,
        api: &StorefrontApi<T>,
        view: &mut V,
        notifier: &mut N,
    ) -> Outcome
    where
        T: Transport,
        V: StepView,
        N: Notifier,
    {
        match self.begin(view, notifier) {
            Submission::Finished(outcome) => outcome,
            Submission::Ready(pending) => {
                let result = pending.send(api).await;
                self.complete(pending, result, view, notifier)
            }
        }
    }

    fn show<V: StepView>(&mut self, view: &mut V, step: Step) {
        info!(from = self.state.step.number(), to = step.number(), "wizard step changed");
        self.state.step = step;
        view.show(step);
    }

    fn build_request<V: StepView>(&mut self, step: Step, view: &V) -> Result<AuthRequest, &'static str> {
        let values = view.form_values(step);

        match step {
            Step::Identify => {
                let identifier = values.identifier.trim();
                if identifier.is_empty() {
                    return Err("Please enter your email or phone number");
                }
                self.state.identifier = identifier.to_string();
                Ok(AuthRequest::Check(CheckRequest {
                    email_or_phone: self.state.identifier.clone(),
                }))
            }
            Step::Password => {
                if values.password.is_empty() {
                    return Err("Please enter your password");
                }
                Ok(AuthRequest::Login(LoginRequest {
                    email_or_phone: self.state.identifier.clone(),
                    password: values.password,
                }))
            }
            Step::Verify => {
                let code = values.code.trim();
                if code.is_empty() {
                    return Err("Please enter the verification code");
                }
                Ok(AuthRequest::Verify(VerifyRequest {
                    email_or_phone: self.state.identifier.clone(),
                    code: code.to_string(),
                }))
            }
            Step::Register => {
                let username = values.username.trim();
                if username.is_empty() {
                    return Err("Please choose a username");
                }
                let email = values.email.trim();
                let phone = values.phone.trim();
                if email.is_empty() && phone.is_empty() {
                    return Err("Please enter an email or phone number");
                }
                Ok(AuthRequest::Register(RegisterRequest {
                    username: username.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    code: self.state.pending_code.clone(),
                }))
            }
        }
    }
}

fn notify_success<N: Notifier>(notifier: &mut N, reply: &AuthReply, fallback: &str) {
    let message = if reply.message.trim().is_empty() {
        fallback
    } else {
        reply.message.as_str()
    };
    notifier.notify(NotificationKind::Success, message);
}
