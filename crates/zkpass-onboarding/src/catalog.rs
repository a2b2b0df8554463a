//! Static step catalog for the onboarding walkthrough.
//!
//! Each step is an immutable [`StepDefinition`]: marketing copy, an optional
//! icon, and the ordered action buttons with their transition timings. The
//! view layer is a straight lookup over this table.

use std::time::Duration;

use crate::state::OnboardingStep;

/// Inline SVG icon rendered above a step title.
#[derive(Clone, Copy, Debug)]
pub struct StepIcon {
    /// SVG path data, drawn on a 24x24 viewbox.
    pub path: &'static str,
    /// Rendered size in pixels.
    pub size: u32,
}

/// Visual weight of an action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    /// Pulsing call-to-action (welcome screen only).
    Primary,
    Default,
    Outline,
}

impl ActionStyle {
    /// CSS classes for the button element.
    pub fn class_name(&self) -> &'static str {
        match self {
            ActionStyle::Primary => "demo-btn demo-btn-primary",
            ActionStyle::Default => "demo-btn",
            ActionStyle::Outline => "demo-btn demo-btn-outline",
        }
    }
}

/// How an action reaches its target step.
#[derive(Clone, Copy, Debug)]
pub enum Transition {
    /// Busy phase with a spinner for `delay`, then the target step.
    Delayed {
        delay: Duration,
        busy_message: &'static str,
    },
    /// Switch with no busy phase.
    Immediate,
}

/// One button on a step card.
#[derive(Clone, Copy, Debug)]
pub struct Action {
    pub label: &'static str,
    pub target: OnboardingStep,
    pub transition: Transition,
    pub style: ActionStyle,
}

/// Static, immutable description of one onboarding screen.
#[derive(Clone, Copy, Debug)]
pub struct StepDefinition {
    pub step: OnboardingStep,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: Option<StepIcon>,
    /// Dashboard-only mock balance panel.
    pub show_balance: bool,
    pub actions: &'static [Action],
}

const LOCK_ICON: &str = "M18 8h-1V6c0-2.76-2.24-5-5-5S7 3.24 7 6v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm-6 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zM9 8V6c0-1.66 1.34-3 3-3s3 1.34 3 3v2H9z";
const PERSON_ICON: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 4c1.93 0 3.5 1.57 3.5 3.5S13.93 13 12 13s-3.5-1.57-3.5-3.5S10.07 6 12 6zm0 14c-2.03 0-4.43-.82-6.14-2.88C7.55 15.8 9.68 15 12 15s4.45.8 6.14 2.12C16.43 19.18 14.03 20 12 20z";
const KEY_ICON: &str = "M12.65 10C11.83 7.67 9.61 6 7 6c-3.31 0-6 2.69-6 6s2.69 6 6 6c2.61 0 4.83-1.67 5.65-4H17v4h4v-4h2v-4H12.65zM7 14c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2z";
const WALLET_ICON: &str = "M21 18v1c0 1.1-.9 2-2 2H5c-1.11 0-2-.9-2-2V5c0-1.1.89-2 2-2h14c1.1 0 2 .9 2 2v1h-9c-1.11 0-2 .9-2 2v8c0 1.1.89 2 2 2h9zm-9-2h10V8H12v8zm4-2.5c-.83 0-1.5-.67-1.5-1.5s.67-1.5 1.5-1.5 1.5.67 1.5 1.5-.67 1.5-1.5 1.5z";
const ROLLUP_ICON: &str = "M13 12.5h5m-5-4h5M3 18h5v-4H3v4zm10-4v4h8v-4h-8zM3 6v4h5V6H3zm10 0v4h8V6h-8z";
const SHIELD_ICON: &str = "M12 1L3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4zm0 10.99h7c-.53 4.12-3.28 7.79-7 8.94V12H5V6.3l7-3.11v8.8z";

static WELCOME: StepDefinition = StepDefinition {
    step: OnboardingStep::Welcome,
    title: "zkPass",
    body: "A production-ready Web3 login experience that combines the ease of social login, the power of ZK cryptography, and the safety of smart contract wallets—all running gas-free on scalable Layer 2 rollups.",
    icon: Some(StepIcon { path: LOCK_ICON, size: 80 }),
    show_balance: false,
    actions: &[Action {
        label: "See it in action",
        target: OnboardingStep::Login,
        transition: Transition::Delayed {
            delay: Duration::from_millis(500),
            busy_message: "",
        },
        style: ActionStyle::Primary,
    }],
};

static LOGIN: StepDefinition = StepDefinition {
    step: OnboardingStep::Login,
    title: "Step 1: Simple & Secure Login",
    body: "zkPass uses your existing social accounts. No new passwords, no seed phrases to remember.",
    icon: Some(StepIcon { path: PERSON_ICON, size: 64 }),
    show_balance: false,
    actions: &[
        Action {
            label: "Sign in with Google",
            target: OnboardingStep::KeyGen,
            transition: Transition::Delayed {
                delay: Duration::from_millis(2000),
                busy_message: "Authenticating with provider...",
            },
            style: ActionStyle::Default,
        },
        Action {
            label: "Sign in with Apple",
            target: OnboardingStep::KeyGen,
            transition: Transition::Delayed {
                delay: Duration::from_millis(2000),
                busy_message: "Authenticating with provider...",
            },
            style: ActionStyle::Default,
        },
    ],
};

static KEY_GEN: StepDefinition = StepDefinition {
    step: OnboardingStep::KeyGen,
    title: "Step 2: Generating Your Key",
    body: "Using Multi-Party Computation (MPC), a private key is securely created from your login. It's split into pieces so no single party—not even you—holds the full key.",
    icon: Some(StepIcon { path: KEY_ICON, size: 64 }),
    show_balance: false,
    actions: &[Action {
        label: "Securely Generate Wallet",
        target: OnboardingStep::WalletSetup,
        transition: Transition::Delayed {
            delay: Duration::from_millis(2500),
            busy_message: "Creating MPC key shares...",
        },
        style: ActionStyle::Default,
    }],
};

static WALLET_SETUP: StepDefinition = StepDefinition {
    step: OnboardingStep::WalletSetup,
    title: "Step 3: Preparing Smart Wallet",
    body: "An advanced smart contract wallet (ERC-4337) is tied to your identity. To save you costs, it's only deployed to the blockchain with your first transaction (\"lazy deployment\").",
    icon: Some(StepIcon { path: WALLET_ICON, size: 64 }),
    show_balance: false,
    actions: &[Action {
        label: "Go to Dashboard",
        target: OnboardingStep::Dashboard,
        transition: Transition::Delayed {
            delay: Duration::from_millis(1500),
            busy_message: "Finalizing wallet setup...",
        },
        style: ActionStyle::Default,
    }],
};

static DASHBOARD: StepDefinition = StepDefinition {
    step: OnboardingStep::Dashboard,
    title: "Welcome to zkPass",
    body: "Your secure, self-custody wallet is ready. All the complexity of Web3 is handled for you.",
    icon: None,
    show_balance: true,
    actions: &[
        Action {
            label: "Perform Gas-Free Action",
            target: OnboardingStep::Transaction,
            transition: Transition::Delayed {
                delay: Duration::from_millis(2500),
                busy_message: "Sending transaction via relayer...",
            },
            style: ActionStyle::Default,
        },
        Action {
            label: "Learn about Social Recovery",
            target: OnboardingStep::Recovery,
            transition: Transition::Delayed {
                delay: Duration::from_millis(1000),
                busy_message: "",
            },
            style: ActionStyle::Outline,
        },
    ],
};

static TRANSACTION: StepDefinition = StepDefinition {
    step: OnboardingStep::Transaction,
    title: "Transaction Sent!",
    body: "Your transaction was processed instantly on a zkRollup for speed and low cost. The gas fees were automatically covered by a Paymaster, so your experience is always free and seamless.",
    icon: Some(StepIcon { path: ROLLUP_ICON, size: 64 }),
    show_balance: false,
    actions: &[Action {
        label: "Back to Dashboard",
        target: OnboardingStep::Dashboard,
        transition: Transition::Immediate,
        style: ActionStyle::Default,
    }],
};

static RECOVERY: StepDefinition = StepDefinition {
    step: OnboardingStep::Recovery,
    title: "Never Lose Your Account",
    body: "With Social Recovery, you can nominate trusted friends or devices ('Guardians') who can help you regain access if you lose your social login. No more lost funds due to a forgotten password.",
    icon: Some(StepIcon { path: SHIELD_ICON, size: 64 }),
    show_balance: false,
    actions: &[Action {
        label: "Got it",
        target: OnboardingStep::Dashboard,
        transition: Transition::Immediate,
        style: ActionStyle::Default,
    }],
};

impl OnboardingStep {
    /// Look up the static screen definition for this step. Always a hit.
    pub fn definition(self) -> &'static StepDefinition {
        match self {
            OnboardingStep::Welcome => &WELCOME,
            OnboardingStep::Login => &LOGIN,
            OnboardingStep::KeyGen => &KEY_GEN,
            OnboardingStep::WalletSetup => &WALLET_SETUP,
            OnboardingStep::Dashboard => &DASHBOARD,
            OnboardingStep::Transaction => &TRANSACTION,
            OnboardingStep::Recovery => &RECOVERY,
        }
    }

    /// Whether the restart affordance is shown alongside this step.
    pub fn shows_restart(self) -> bool {
        self != OnboardingStep::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay_of(action: &Action) -> Option<(Duration, &'static str)> {
        match action.transition {
            Transition::Delayed {
                delay,
                busy_message,
            } => Some((delay, busy_message)),
            Transition::Immediate => None,
        }
    }

    #[test]
    fn test_every_step_has_matching_definition() {
        for step in OnboardingStep::all() {
            let def = step.definition();
            assert_eq!(def.step, *step);
            assert!(!def.title.is_empty());
            assert!(!def.body.is_empty());
            assert!(!def.actions.is_empty());
        }
    }

    #[test]
    fn test_welcome_screen() {
        let def = OnboardingStep::Welcome.definition();
        assert_eq!(def.title, "zkPass");
        assert_eq!(def.actions.len(), 1);
        let action = &def.actions[0];
        assert_eq!(action.label, "See it in action");
        assert_eq!(action.target, OnboardingStep::Login);
        assert_eq!(action.style, ActionStyle::Primary);
        let (delay, message) = delay_of(action).unwrap();
        assert_eq!(delay, Duration::from_millis(500));
        assert_eq!(message, "");
    }

    #[test]
    fn test_login_providers_share_target_and_delay() {
        let def = OnboardingStep::Login.definition();
        let labels: Vec<_> = def.actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, ["Sign in with Google", "Sign in with Apple"]);
        for action in def.actions {
            assert_eq!(action.target, OnboardingStep::KeyGen);
            let (delay, message) = delay_of(action).unwrap();
            assert_eq!(delay, Duration::from_millis(2000));
            assert_eq!(message, "Authenticating with provider...");
        }
    }

    #[test]
    fn test_linear_path_delays() {
        let keygen = &OnboardingStep::KeyGen.definition().actions[0];
        assert_eq!(keygen.target, OnboardingStep::WalletSetup);
        assert_eq!(
            delay_of(keygen).unwrap(),
            (Duration::from_millis(2500), "Creating MPC key shares...")
        );

        let setup = &OnboardingStep::WalletSetup.definition().actions[0];
        assert_eq!(setup.target, OnboardingStep::Dashboard);
        assert_eq!(
            delay_of(setup).unwrap(),
            (Duration::from_millis(1500), "Finalizing wallet setup...")
        );
    }

    #[test]
    fn test_dashboard_is_hub() {
        let def = OnboardingStep::Dashboard.definition();
        assert!(def.show_balance);
        assert!(def.icon.is_none());
        assert_eq!(def.actions[0].target, OnboardingStep::Transaction);
        assert_eq!(
            delay_of(&def.actions[0]).unwrap(),
            (
                Duration::from_millis(2500),
                "Sending transaction via relayer..."
            )
        );
        assert_eq!(def.actions[1].target, OnboardingStep::Recovery);
        assert_eq!(def.actions[1].style, ActionStyle::Outline);
        assert_eq!(delay_of(&def.actions[1]).unwrap().0, Duration::from_millis(1000));
    }

    #[test]
    fn test_returns_to_dashboard_are_immediate() {
        for step in [OnboardingStep::Transaction, OnboardingStep::Recovery] {
            let def = step.definition();
            assert_eq!(def.actions.len(), 1);
            assert_eq!(def.actions[0].target, OnboardingStep::Dashboard);
            assert!(delay_of(&def.actions[0]).is_none());
        }
    }

    #[test]
    fn test_restart_everywhere_except_welcome() {
        for step in OnboardingStep::all() {
            assert_eq!(step.shows_restart(), *step != OnboardingStep::Welcome);
        }
    }

    #[test]
    fn test_only_dashboard_shows_balance() {
        for step in OnboardingStep::all() {
            assert_eq!(
                step.definition().show_balance,
                *step == OnboardingStep::Dashboard
            );
        }
    }
}
