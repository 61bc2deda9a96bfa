//! Currency symbol placement by country.
//!
//! Rules are matched in order on the country name; the first rule listing the
//! country wins, anything unmatched uses the default symbol as a prefix.

use serde::{Deserialize, Serialize};

/// Where a currency symbol goes relative to the amount
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `£12.50`
    Prefix,
    /// `12.50kr`
    Suffix,
}

/// A symbol shared by one or more countries
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrencyRule {
    pub countries: Vec<String>,
    pub symbol: String,
    #[serde(default = "default_position")]
    pub position: SymbolPosition,
}

/// Ordered country to symbol table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrencyRules {
    #[serde(default = "default_symbol")]
    pub default_symbol: String,
    #[serde(default)]
    pub rules: Vec<CurrencyRule>,
}

fn default_position() -> SymbolPosition {
    SymbolPosition::Prefix
}

fn default_symbol() -> String {
    "€".to_string()
}

impl CurrencyRule {
    fn new(countries: &[&str], symbol: &str, position: SymbolPosition) -> Self {
        Self {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            symbol: symbol.to_string(),
            position,
        }
    }

    fn applies_to(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }
}

impl Default for CurrencyRules {
    fn default() -> Self {
        Self {
            default_symbol: default_symbol(),
            rules: vec![
                CurrencyRule::new(&["United Kingdom"], "£", SymbolPosition::Prefix),
                CurrencyRule::new(&["Sweden", "Norway"], "kr", SymbolPosition::Suffix),
                CurrencyRule::new(&["Canada", "New Zealand"], "$", SymbolPosition::Prefix),
            ],
        }
    }
}

impl CurrencyRules {
    /// Attach the symbol used in `country` to an already formatted amount
    ///
    /// # Examples
    /// ```
    /// use trafficutils::utils::currency::CurrencyRules;
    ///
    /// let rules = CurrencyRules::default();
    /// assert_eq!(rules.format("United Kingdom", "12.50"), "£12.50");
    /// assert_eq!(rules.format("Norway", "99"), "99kr");
    /// assert_eq!(rules.format("Ireland", "5.00"), "€5.00");
    /// ```
    pub fn format(&self, country: &str, amount: &str) -> String {
        match self.rules.iter().find(|rule| rule.applies_to(country)) {
            Some(rule) => match rule.position {
                SymbolPosition::Prefix => format!("{}{}", rule.symbol, amount),
                SymbolPosition::Suffix => format!("{}{}", amount, rule.symbol),
            },
            None => format!("{}{}", self.default_symbol, amount),
        }
    }
}
