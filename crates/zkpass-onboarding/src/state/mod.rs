//! State management for the onboarding flow.
//!
//! The sequencer core is pure and synchronous: the UI layer owns the actual
//! timers and calls back into [`OnboardingState`] when a delay elapses. Every
//! delayed transition carries a [`TransitionTicket`]; `reset()` and any newer
//! transition invalidate outstanding tickets, so a timer that fires late is a
//! no-op instead of overwriting fresher state.

/// One discrete screen in the fixed onboarding sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Login,
    KeyGen,
    WalletSetup,
    Dashboard,
    Transaction,
    Recovery,
}

impl OnboardingStep {
    /// Short lowercase name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "welcome",
            OnboardingStep::Login => "login",
            OnboardingStep::KeyGen => "keygen",
            OnboardingStep::WalletSetup => "wallet-setup",
            OnboardingStep::Dashboard => "dashboard",
            OnboardingStep::Transaction => "transaction",
            OnboardingStep::Recovery => "recovery",
        }
    }

    /// All steps in flow order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Welcome,
            OnboardingStep::Login,
            OnboardingStep::KeyGen,
            OnboardingStep::WalletSetup,
            OnboardingStep::Dashboard,
            OnboardingStep::Transaction,
            OnboardingStep::Recovery,
        ]
    }
}

/// Ticket identifying one scheduled delayed transition.
///
/// Only the most recently issued ticket can complete a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket(u64);

/// State owned by the screen sequencer.
#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingState {
    /// Current step. Only changes when a transition completes.
    pub step: OnboardingStep,
    /// When true, the busy indicator is shown instead of step content.
    pub busy: bool,
    /// Message displayed under the spinner during the busy phase.
    pub busy_message: String,
    /// Monotonic sequence; bumped whenever outstanding timers become stale.
    seq: u64,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            busy: false,
            busy_message: String::new(),
            seq: 0,
        }
    }
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the busy phase for a delayed transition.
    ///
    /// Synchronous and immediately visible: the busy indicator replaces step
    /// content until [`finish_transition`](Self::finish_transition) applies.
    /// Issuing a new ticket invalidates any previously issued one.
    pub fn begin_transition(&mut self, message: &str) -> TransitionTicket {
        self.busy = true;
        self.busy_message = message.to_string();
        self.seq += 1;
        TransitionTicket(self.seq)
    }

    /// Complete a delayed transition if its ticket is still current.
    ///
    /// Returns whether the transition applied. A stale ticket (reset or a
    /// newer transition happened in the meantime) leaves state untouched.
    pub fn finish_transition(&mut self, ticket: TransitionTicket, target: OnboardingStep) -> bool {
        if !self.busy || ticket.0 != self.seq {
            return false;
        }
        self.busy = false;
        self.busy_message.clear();
        self.step = target;
        true
    }

    /// Switch steps immediately, with no busy phase.
    pub fn go_direct(&mut self, target: OnboardingStep) {
        self.seq += 1;
        self.busy = false;
        self.busy_message.clear();
        self.step = target;
    }

    /// Return to the welcome screen, cancelling any pending transition.
    ///
    /// Synchronous and idempotent.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.busy = false;
        self.busy_message.clear();
        self.step = OnboardingStep::Welcome;
    }
}
