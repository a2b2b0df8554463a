//! zkPass onboarding demo.
//!
//! A single-window walkthrough of a simulated Web3 onboarding flow: social
//! login, MPC key generation, smart wallet setup, dashboard, gasless
//! transaction, and social recovery. All screens are static marketing copy;
//! transitions are driven by simulated delays.

pub mod catalog;
pub mod components;
pub mod state;
