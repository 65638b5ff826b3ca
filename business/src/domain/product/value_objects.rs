use super::errors::ProductError;

/// Store-assigned product identifier.
///
/// Travels as a decimal string on every wire; parsing only accepts plain
/// ASCII digits that fit the store's native `i64` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the store's native key.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProductError::InvalidId(s.to_string()));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ProductError::InvalidId(s.to_string()))
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_id() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn should_display_id_as_decimal_string() {
        assert_eq!(ProductId::new(1001).to_string(), "1001");
    }

    #[test]
    fn should_reject_non_numeric_id() {
        let result = "abc".parse::<ProductId>();
        assert!(matches!(result, Err(ProductError::InvalidId(raw)) if raw == "abc"));
    }

    #[test]
    fn should_reject_empty_id() {
        assert!(matches!(
            "".parse::<ProductId>(),
            Err(ProductError::InvalidId(_))
        ));
    }

    #[test]
    fn should_reject_signed_and_padded_ids() {
        for raw in ["-1", "+1", " 1", "1 ", "1.5", "0x10"] {
            assert!(
                matches!(raw.parse::<ProductId>(), Err(ProductError::InvalidId(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn should_reject_id_overflowing_native_key() {
        assert!(matches!(
            "9223372036854775808".parse::<ProductId>(),
            Err(ProductError::InvalidId(_))
        ));
    }
}
