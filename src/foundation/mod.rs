//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the lighting
//! subsystem:
//! - Math types and constants
//! - Logging utilities

pub mod logging;
pub mod math;
