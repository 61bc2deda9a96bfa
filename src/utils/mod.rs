//! Stand-alone helpers: number and date formatting, string lists, JSON,
//! request inspection, currency symbols and third-party rate and geocoding
//! lookups.

pub mod currency;
pub mod dates;
pub mod ip_utils;
pub mod json;
pub mod numbers;
pub mod strings;
pub mod web;

pub use currency::{CurrencyRule, CurrencyRules, SymbolPosition};
pub use dates::{format_iso_date, format_with_suffix, parse_iso_date, DateError};
pub use ip_utils::client_addr;
pub use json::pretty_print;
pub use numbers::{comma, commaf, format_float};
pub use strings::{remove_duplicates, trim_after};
pub use web::{ApiClient, ApiEndpoints, ApiError};
