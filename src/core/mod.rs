//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The emoji code-point set and string stripping
//! - The path filter (extension allow-list, directory exclusions)
//! - Run model (outcomes, summary, errors)
//! - Path normalization utilities
//! - Rendering of progress and summary output

pub mod emoji;
pub mod filter;
pub mod model;
pub mod paths;
pub mod render;
