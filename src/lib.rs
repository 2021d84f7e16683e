//! # Algo-Labs
//!
//! Textbook algorithms timed side by side: each lab generates inputs of
//! growing size, runs every variant once per size and reports how they
//! compare.

pub mod config;
pub mod error;
pub mod generators;
pub mod graph;
pub mod math;
pub mod registry;
pub mod sorting;
pub mod utils;

pub use error::{LabError, Result};
pub use utils::tui;

/// Re-export run_and_display from utils::tui
pub use utils::tui::run_and_display;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{LabError, Result};
    pub use crate::registry::{build_registry, LabRegistry, LabRunner};
    pub use crate::utils::{lab_rng, run_lab, PinStrategy, TimingConfig, TimingTable};
}
