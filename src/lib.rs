//! # Reversi TUI
//!
//! Reversi/Othello for two players (human or CPU stand-in) in the terminal,
//! driven by arrow keys. The UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, flips, legal moves, turn state machine
//! - [`ai`] — Agent trait and the first-legal-move CPU stand-in
//! - [`ui`] — Terminal UI: controller, input thread, game view, startup prompt
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
