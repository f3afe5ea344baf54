//! Core library components.
//!
//! This module contains the reusable logic for tracking files, encrypting
//! their contents, and persisting the workspace metadata file.

pub mod cipher;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod domain;
pub mod store;
pub mod workspace;
