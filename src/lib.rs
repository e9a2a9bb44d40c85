//! wdid: a terminal client for the What Do I Draw prompt service
//!
//! The core is [`engine::PromptRenderer`], which tags each slot word inside
//! a prompt sentence so it can be highlighted and searched. Around it sit
//! the HTTP client ([`api`]), the application state machine ([`app`]) and
//! the ratatui front end ([`ui`]).

pub mod api;
pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod session;
pub mod share;
pub mod ui;

pub use error::WdidError;
