//! stringinspect library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod analysis;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod export;
pub mod history;
pub mod legacy;
pub mod logging;
pub mod search;
pub mod terminal;
