//! Bump or change quoted semantic version numbers across a configured set
//! of files.
//!
//! The [`engine::Engine`] scans each configured file for the first quoted
//! `MAJOR.MINOR.PATCH` literal, then rewrites it either by bump arithmetic
//! (major resets minor and patch, minor resets patch) or by an explicit
//! replacement value, preserving each file's own quote style and every
//! other byte of content.

pub mod arguments;
pub mod config;
pub mod engine;
pub mod error;
pub mod locator;
pub mod rewriter;
pub mod ui;
pub mod version;
