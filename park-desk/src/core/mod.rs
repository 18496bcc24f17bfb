//! 核心模块 - configuration and the desk state root

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{DeskCommand, DeskState, Outcome, Tab};
