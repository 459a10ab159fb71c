//! Navigation logic for Megatron.
//!
//! This module contains the [`navigator::Navigator`] state machine, the
//! [`history::NavigationStack`] it uses to restore the cursor when ascending,
//! and the [`preview::Preview`] projection the UI draws from.

pub mod history;
pub mod navigator;
pub mod preview;
