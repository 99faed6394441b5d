//! Shared test utilities for the widget-builder workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`widget`] — [`widget::TestWidget`] builder for temporary widget directories

pub mod widget;
