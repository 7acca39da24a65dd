use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::AppError;

/// Sums stored decimal amounts exactly. Empty input sums to zero.
pub fn sum_amounts(amounts: &[String]) -> Result<Decimal, AppError> {
    amounts.iter().try_fold(Decimal::ZERO, |total, raw| {
        let amount = Decimal::from_str(raw.trim())
            .map_err(|_| AppError::InternalWithMsg(format!("Stored amount is not a decimal: {}", raw)))?;
        Ok(total + amount)
    })
}
