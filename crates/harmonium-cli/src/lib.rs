//! Harmonium sample renamer library.
//!
//! This crate provides the batch rename command behind the `harmonium-rename`
//! binary: directory scanning, per-file outcomes, and console/JSON reporting.

pub mod commands;
