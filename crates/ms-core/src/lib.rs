// ABOUTME: Shared types and configuration for multisplit.
// ABOUTME: Defines pixel geometry, orientation, and config file handling.

pub mod config;
pub mod geometry;

pub use config::{Config, ConfigError, DEFAULT_DIVIDER_SIZE};
pub use geometry::{CursorStyle, Orientation, Point, Rect, Size};
