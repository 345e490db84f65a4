//! MouseBind core library.
//!
//! This library provides the logical core of MouseBind: mouse hardware
//! profiles, button mapping presets, context-aware binding resolution,
//! preset validation, and the action catalog/registry the host
//! integration executes against.

// Module declarations
pub mod action_db;
pub mod cli;
pub mod config;
pub mod constants;
pub mod detector;
pub mod manager;
pub mod models;
pub mod platform;
pub mod profile_db;
pub mod registry;
pub mod resolver;
pub mod validator;
