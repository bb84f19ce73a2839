/// Display configuration shared by the formatting helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prefix for currency amounts.
    pub currency_symbol: String,
    /// Rendered in place of absent values.
    pub placeholder: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
