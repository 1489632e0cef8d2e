//! Core library modules for cabroster.
//!
//! - [`schedule`] and [`shift`]: request expansion and row merging
//! - [`input`]: parsing of raw roster text
//! - [`export`] and [`view`]: file and terminal output
//! - [`config`], [`data_storage`], [`messages`], [`telemetry`]: infrastructure

pub mod config;
pub mod data_storage;
pub mod export;
pub mod input;
pub mod messages;
pub mod schedule;
pub mod shift;
pub mod telemetry;
pub mod view;
