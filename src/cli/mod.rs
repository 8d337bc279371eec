//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the backup engine.

pub mod config;
pub mod trigger;

pub use config::{handle_config_command, handle_init_command};
pub use trigger::{handle_trigger, Trigger, TriggerArgs};
