use super::errors::ProductError;
use super::model::ProductProps;

/// Checks a candidate's field values before any mutation is attempted.
///
/// Rules run in a fixed order and the first failure wins:
/// 1. `name` is not blank
/// 2. `price` is finite and strictly positive
/// 3. `stock` is not negative
pub fn validate(props: &ProductProps) -> Result<(), ProductError> {
    if props.name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }

    if !props.price.is_finite() || props.price <= 0.0 {
        return Err(ProductError::PriceNotPositive);
    }

    if props.stock < 0 {
        return Err(ProductError::StockNegative);
    }

    Ok(())
}
