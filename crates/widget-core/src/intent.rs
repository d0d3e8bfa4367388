//! Payment Intent
//!
//! The mutable amount/currency pair a widget handle carries between
//! construction and render. Mutated only through setters; snapshotted into
//! [`crate::mount::RenderData`] at render time.

use crate::error::{EmbedError, Result};

/// Currency used when the caller never sets one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Amount input accepted by `set_amount`
///
/// The original API took a number or a numeric string; this enum is the typed
/// rendition of that coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    /// Coerce to a plain amount
    ///
    /// Non-numeric text and non-finite numbers are rejected.
    pub fn to_amount(&self) -> Result<f64> {
        let amount = match self {
            AmountValue::Number(value) => *value,
            AmountValue::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                EmbedError::Validation(format!("Amount value is not numeric: {text:?}"))
            })?,
        };

        if amount.is_finite() {
            Ok(amount)
        } else {
            Err(EmbedError::Validation(
                "Amount value must be a finite number".into(),
            ))
        }
    }
}

impl From<f64> for AmountValue {
    fn from(value: f64) -> Self {
        AmountValue::Number(value)
    }
}

impl From<i64> for AmountValue {
    fn from(value: i64) -> Self {
        AmountValue::Number(value as f64)
    }
}

impl From<i32> for AmountValue {
    fn from(value: i32) -> Self {
        AmountValue::Number(f64::from(value))
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        AmountValue::Text(value.to_string())
    }
}

impl From<String> for AmountValue {
    fn from(value: String) -> Self {
        AmountValue::Text(value)
    }
}

/// Mutable payment state owned by the widget handle
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentIntent {
    pub amount: Option<f64>,
    pub currency: String,
}

impl Default for PaymentIntent {
    fn default() -> Self {
        Self {
            amount: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PaymentIntent {
    /// Store a coerced amount; leaves prior state untouched on failure
    pub fn set_amount(&mut self, value: AmountValue) -> Result<()> {
        self.amount = Some(value.to_amount()?);
        Ok(())
    }

    /// The set amount, if it can back a render call
    ///
    /// Mirrors the original render-time gate: the amount must exist and be
    /// positive before any surface is created.
    pub fn renderable_amount(&self) -> Result<f64> {
        match self.amount {
            Some(amount) if amount > 0.0 => Ok(amount),
            Some(_) => Err(EmbedError::Validation(
                "Amount must be greater than zero".into(),
            )),
            None => Err(EmbedError::Validation(
                "Amount is required. Use set_amount to set it".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_coercion() {
        assert_eq!(AmountValue::from("10.5").to_amount().unwrap(), 10.5);
        assert_eq!(AmountValue::from(" 25 ").to_amount().unwrap(), 25.0);
        assert_eq!(AmountValue::from(25).to_amount().unwrap(), 25.0);
    }

    #[test]
    fn test_garbage_text_rejected() {
        let err = AmountValue::from("ten dollars").to_amount().unwrap_err();
        assert!(matches!(err, EmbedError::Validation(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(AmountValue::from(f64::NAN).to_amount().is_err());
        assert!(AmountValue::from("inf").to_amount().is_err());
    }

    #[test]
    fn test_failed_set_keeps_prior_amount() {
        let mut intent = PaymentIntent::default();
        intent.set_amount(AmountValue::from(25)).unwrap();
        assert!(intent.set_amount(AmountValue::from("oops")).is_err());
        assert_eq!(intent.amount, Some(25.0));
    }

    #[test]
    fn test_renderable_amount_gate() {
        let mut intent = PaymentIntent::default();
        assert!(intent.renderable_amount().is_err());

        intent.set_amount(AmountValue::from(0)).unwrap();
        assert!(intent.renderable_amount().is_err());

        intent.set_amount(AmountValue::from("10.5")).unwrap();
        assert_eq!(intent.renderable_amount().unwrap(), 10.5);
        assert_eq!(intent.currency, DEFAULT_CURRENCY);
    }
}
