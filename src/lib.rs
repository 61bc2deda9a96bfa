//! # Trafficutils - small helpers for string, number and date handling
//!
//! A flat collection of independent helper functions. Nothing is shared
//! between calls and no function depends on another beyond plain calls.
//!
//! ## Architecture
//!
//! - `algorithms`: descending string sort, manual integer-to-decimal
//!   rendering and statistical mode
//! - `utils`: number formatting, string lists, calendar helpers, JSON
//!   re-indentation, client address lookup, currency symbols and blocking
//!   exchange-rate and geocoding lookups
//! - `config`: YAML configuration structures and validation
//! - `config_loader`: configuration file loading
//!
//! ## Example Usage
//!
//! ```rust
//! use trafficutils::algorithms::{mode, sort_descending, to_decimal_string};
//! use trafficutils::utils::numbers::comma;
//!
//! let mut routes = vec!["north", "east", "west"];
//! sort_descending(&mut routes);
//! assert_eq!(routes, ["west", "north", "east"]);
//!
//! assert_eq!(to_decimal_string(-42), "-42");
//! assert_eq!(mode(&["a", "b", "a"]), "a");
//! assert_eq!(comma(1234567), "1,234,567");
//! ```
//!
//! ## Error Handling
//!
//! Library helpers that can fail return typed `thiserror` errors
//! (`DateError`, `ValidationError`, `ApiError`). Configuration loading and the command
//! line tool use `color_eyre` for error reports with context.

pub mod algorithms;
pub mod config;
pub mod config_loader;
pub mod utils;
