//! The terminal interaction engine.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure widget state machines and constructors
//! - `update`: pure transitions (widget × key/tick → step)
//! - `view`: pure rendering (widget → ratatui widget tree)
//! - `theme`: style constants
//! - `input`, `terminal`, `run`: the effects boundary

pub mod input;
pub mod run;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
