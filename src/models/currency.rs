//! Supported currencies and their display symbols

/// A currency the onboarding flows offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "€", name: "Euro" },
    Currency { code: "GBP", symbol: "£", name: "British Pound" },
    Currency { code: "INR", symbol: "₹", name: "Indian Rupee" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
];

/// Business onboarding offers the first four only
pub const BUSINESS_CURRENCY_COUNT: usize = 4;

/// Look up a currency by ISO code
pub fn find(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Display symbol for a code; unknown or missing codes fall back to `$`
pub fn symbol_for(code: Option<&str>) -> &'static str {
    code.and_then(find).map(|c| c.symbol).unwrap_or("$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(symbol_for(Some("INR")), "₹");
        assert_eq!(symbol_for(Some("EUR")), "€");
        assert_eq!(symbol_for(Some("AUD")), "A$");
    }

    #[test]
    fn test_fallback_symbol() {
        assert_eq!(symbol_for(Some("XYZ")), "$");
        assert_eq!(symbol_for(None), "$");
    }
}
