//! Fixed-point decimals
//!
//! Harga di BOE dikirim sebagai mantissa i64 dengan exponent konstan.
//! Exponent tidak ikut di wire, hanya di tipe.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::{Error, Result};
use super::primitive::{Primitive, NULL_INT64};

/// Decimal with an i64 mantissa and a compile-time exponent.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint<const EXPONENT: i8> {
    mantissa: i64,
}

/// Price with 4 decimal places.
pub type Price = FixedPoint<-4>;
/// Price with 8 decimal places.
pub type Price8 = FixedPoint<-8>;
/// Price offset (thresholds) with 4 decimal places.
pub type PriceOffset = FixedPoint<-4>;
/// Percentage with 8 decimal places.
pub type Percentage8 = FixedPoint<-8>;
/// Leg ratio quantity with 7 decimal places.
pub type RatioQty = FixedPoint<-7>;

impl<const EXPONENT: i8> FixedPoint<EXPONENT> {
    /// Null value of the optional decimal encodings.
    pub const NULL: Self = Self {
        mantissa: NULL_INT64,
    };

    #[inline(always)]
    pub const fn from_mantissa(mantissa: i64) -> Self {
        Self { mantissa }
    }

    #[inline(always)]
    pub const fn mantissa(&self) -> i64 {
        self.mantissa
    }

    #[inline(always)]
    pub const fn exponent(&self) -> i8 {
        EXPONENT
    }

    /// Number of decimal places.
    #[inline(always)]
    pub const fn scale() -> u32 {
        EXPONENT.unsigned_abs() as u32
    }

    /// Whole units, e.g. `Price::from_units(10)` is 10.0000.
    ///
    /// Fails with `BadConversion` when the mantissa overflows i64.
    pub fn from_units(units: i64) -> Result<Self> {
        let mantissa = units
            .checked_mul(10i64.pow(Self::scale()))
            .ok_or(Error::BadConversion {
                field: "FixedPoint",
            })?;
        Ok(Self { mantissa })
    }

    /// Lossy conversion for display/analytics.
    pub fn to_f64(&self) -> f64 {
        self.mantissa as f64 * 10f64.powi(EXPONENT as i32)
    }

    /// Exact conversion to [`Decimal`].
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.mantissa, Self::scale())
    }

    /// Converts from [`Decimal`], rounding to the exponent of the type.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let mut scaled = value;
        scaled.rescale(Self::scale());
        let mantissa = scaled.mantissa().to_i64().ok_or(Error::BadConversion {
            field: "FixedPoint",
        })?;
        Ok(Self { mantissa })
    }
}

impl<const EXPONENT: i8> Primitive for FixedPoint<EXPONENT> {
    const SIZE: usize = 8;

    #[inline(always)]
    fn read_le(buf: &[u8]) -> Self {
        Self {
            mantissa: i64::read_le(buf),
        }
    }

    #[inline(always)]
    fn write_le(self, buf: &mut [u8]) {
        self.mantissa.write_le(buf);
    }
}

impl<const EXPONENT: i8> fmt::Display for FixedPoint<EXPONENT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_decimal(), f)
    }
}

impl<const EXPONENT: i8> fmt::Debug for FixedPoint<EXPONENT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const EXPONENT: i8> TryFrom<Decimal> for FixedPoint<EXPONENT> {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::from_decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_price_decimal_roundtrip() {
        let price = Price::from_decimal(Decimal::from_str("12.3456").unwrap()).unwrap();
        assert_eq!(price.mantissa(), 123_456);
        assert_eq!(price.to_decimal(), Decimal::from_str("12.3456").unwrap());
        assert_eq!(price.to_string(), "12.3456");
    }

    #[test]
    fn test_rounding_to_scale() {
        let price = Price::from_decimal(Decimal::from_str("1.23456").unwrap()).unwrap();
        assert_eq!(price.mantissa(), 12_346);
    }

    #[test]
    fn test_units_and_f64() {
        let qty = RatioQty::from_units(1).unwrap();
        assert_eq!(qty.mantissa(), 10_000_000);
        assert_eq!(Price::from_units(-3).unwrap().mantissa(), -30_000);
        assert!((Price8::from_mantissa(150_000_000).to_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_units_overflow() {
        assert_eq!(
            Price8::from_units(i64::MAX / 10),
            Err(Error::BadConversion {
                field: "FixedPoint"
            })
        );
        assert!(Price::from_units(i64::MIN).is_err());
        assert!(Price::from_units(i64::MAX / 10_000).is_ok());
    }

    #[test]
    fn test_null_sentinel() {
        assert_eq!(Price::NULL.mantissa(), i64::MIN);
    }
}
