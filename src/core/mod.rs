//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Search result model (MatchSpan, Segment, SearchReport)
//! - Rendering functions for different output formats
//! - Input reading strategies (file or stdin, lossy UTF-8)

pub mod input;
pub mod model;
pub mod render;
