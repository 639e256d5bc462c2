/// One screen of the authentication wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Identify,
    Password,
    Verify,
    Register,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Identify, Step::Password, Step::Verify, Step::Register];

    /// 1-based position, as shown to the user
    pub fn number(&self) -> u8 {
        match self {
            Step::Identify => 1,
            Step::Password => 2,
            Step::Verify => 3,
            Step::Register => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Identify => "Sign in or create an account",
            Step::Password => "Enter your password",
            Step::Verify => "Enter the verification code",
            Step::Register => "Complete your registration",
        }
    }

    /// Label of the step's submit button while idle
    pub fn action_label(&self) -> &'static str {
        match self {
            Step::Identify => "Continue",
            Step::Password => "Sign in",
            Step::Verify => "Verify",
            Step::Register => "Create account",
        }
    }

    /// Label of the step's submit button while its request is in flight
    pub fn pending_label(&self) -> &'static str {
        match self {
            Step::Identify => "Checking...",
            Step::Password => "Signing in...",
            Step::Verify => "Verifying...",
            Step::Register => "Creating account...",
        }
    }

    /// Notification shown when the step's request could not complete
    pub fn failure_message(&self) -> &'static str {
        match self {
            Step::Identify => "Could not check your account",
            Step::Password => "Could not sign you in",
            Step::Verify => "Could not verify the code",
            Step::Register => "Could not complete registration",
        }
    }

    fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// State owned by the wizard controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub step: Step,
    /// Email or phone captured at the identify step
    pub identifier: String,
    /// Code accepted at the verify step, sent again with the registration
    pub pending_code: String,
    pub open: bool,
    /// Bumped on every open and close
    pub epoch: u64,
    in_flight: [Option<u64>; 4],
    next_ticket: u64,
}

impl WizardState {
    /// Whether `step` has a request in flight
    pub fn is_busy(&self, step: Step) -> bool {
        self.in_flight[step.index()].is_some()
    }

    pub(crate) fn mark_busy(&mut self, step: Step) -> u64 {
        self.next_ticket += 1;
        self.in_flight[step.index()] = Some(self.next_ticket);
        self.next_ticket
    }

    /// Clear the busy flag if `ticket` still owns it
    pub(crate) fn release(&mut self, step: Step, ticket: u64) -> bool {
        let slot = &mut self.in_flight[step.index()];
        if *slot == Some(ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Start a fresh modal session, keeping only the counters
    pub(crate) fn reset(&mut self, open: bool) {
        *self = Self {
            open,
            epoch: self.epoch + 1,
            next_ticket: self.next_ticket,
            ..Self::default()
        };
    }
}
