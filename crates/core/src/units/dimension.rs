//! Physical dimensions as integer exponents over the SI base units
//!
//! A [`Dimension`] records the exponent of each of the seven SI base units
//! (kilogram, meter, second, ampere, kelvin, mole, candela). Two quantities
//! are convertible exactly when their dimensions are equal, and any derived
//! unit reduces to the product of base units these exponents describe.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Number of SI base units tracked.
const BASE_COUNT: usize = 7;

/// Display symbols for the base units, in exponent-array order.
const BASE_SYMBOLS: [&str; BASE_COUNT] = ["kg", "m", "s", "A", "K", "mol", "cd"];

/// Exponents over the seven SI base units.
///
/// Order: mass (kg), length (m), time (s), current (A), temperature (K),
/// amount (mol), luminous intensity (cd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension([i8; BASE_COUNT]);

impl Dimension {
    /// Dimensionless (all exponents zero).
    pub const NONE: Dimension = Dimension([0; BASE_COUNT]);
    /// Mass (kg).
    pub const MASS: Dimension = Dimension([1, 0, 0, 0, 0, 0, 0]);
    /// Length (m).
    pub const LENGTH: Dimension = Dimension([0, 1, 0, 0, 0, 0, 0]);
    /// Time (s).
    pub const TIME: Dimension = Dimension([0, 0, 1, 0, 0, 0, 0]);
    /// Electric current (A).
    pub const CURRENT: Dimension = Dimension([0, 0, 0, 1, 0, 0, 0]);
    /// Thermodynamic temperature (K).
    pub const TEMPERATURE: Dimension = Dimension([0, 0, 0, 0, 1, 0, 0]);
    /// Amount of substance (mol).
    pub const AMOUNT: Dimension = Dimension([0, 0, 0, 0, 0, 1, 0]);
    /// Luminous intensity (cd).
    pub const LUMINOSITY: Dimension = Dimension([0, 0, 0, 0, 0, 0, 1]);

    /// Force (kg·m/s²).
    pub const FORCE: Dimension = Dimension([1, 1, -2, 0, 0, 0, 0]);
    /// Energy (kg·m²/s²).
    pub const ENERGY: Dimension = Dimension([1, 2, -2, 0, 0, 0, 0]);
    /// Power (kg·m²/s³).
    pub const POWER: Dimension = Dimension([1, 2, -3, 0, 0, 0, 0]);
    /// Pressure (kg/(m·s²)).
    pub const PRESSURE: Dimension = Dimension([1, -1, -2, 0, 0, 0, 0]);
    /// Frequency (1/s).
    pub const FREQUENCY: Dimension = Dimension([0, 0, -1, 0, 0, 0, 0]);
    /// Volume (m³).
    pub const VOLUME: Dimension = Dimension([0, 3, 0, 0, 0, 0, 0]);
    /// Acceleration (m/s²).
    pub const ACCELERATION: Dimension = Dimension([0, 1, -2, 0, 0, 0, 0]);

    /// True if every exponent is zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.0 == [0; BASE_COUNT]
    }

    /// Dimension of a product: exponents add.
    ///
    /// `None` when an exponent leaves the representable range, so chained
    /// products cannot wrap into a wrong dimension.
    pub fn mul(&self, other: &Dimension) -> Option<Dimension> {
        let mut out = [0i8; BASE_COUNT];
        for i in 0..BASE_COUNT {
            out[i] = self.0[i].checked_add(other.0[i])?;
        }
        Some(Dimension(out))
    }

    /// Dimension of a quotient: exponents subtract.
    ///
    /// `None` when an exponent leaves the representable range.
    pub fn div(&self, other: &Dimension) -> Option<Dimension> {
        let mut out = [0i8; BASE_COUNT];
        for i in 0..BASE_COUNT {
            out[i] = self.0[i].checked_sub(other.0[i])?;
        }
        Some(Dimension(out))
    }

    /// Dimension raised to an integer power: exponents scale.
    ///
    /// `None` when an exponent leaves the representable range.
    pub fn powi(&self, exp: i8) -> Option<Dimension> {
        let mut out = [0i8; BASE_COUNT];
        for i in 0..BASE_COUNT {
            out[i] = self.0[i].checked_mul(exp)?;
        }
        Some(Dimension(out))
    }

    /// Render the dimension as a product of SI base unit symbols.
    ///
    /// Positive exponents form the numerator joined with `·`, negative ones
    /// the denominator, exponents ≥ 2 written as `^n`. A pure-denominator
    /// dimension gets a leading `1` (e.g. frequency is `1/s`), and the
    /// dimensionless case renders as the empty string.
    ///
    /// The output is accepted verbatim by the unit-expression parser, which
    /// is what makes base reduction idempotent.
    pub fn base_symbol(&self) -> String {
        let mut numerator = String::new();
        let mut denominator = String::new();
        let mut denom_terms = 0usize;
        for (i, &exp) in self.0.iter().enumerate() {
            if exp == 0 {
                continue;
            }
            let (target, power) = if exp > 0 {
                (&mut numerator, exp)
            } else {
                denom_terms += 1;
                (&mut denominator, -exp)
            };
            if !target.is_empty() {
                target.push('·');
            }
            target.push_str(BASE_SYMBOLS[i]);
            if power > 1 {
                let _ = write!(target, "^{power}");
            }
        }
        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => String::new(),
            (false, true) => numerator,
            _ => {
                let top = if numerator.is_empty() {
                    "1".to_string()
                } else {
                    numerator
                };
                if denom_terms > 1 {
                    format!("{top}/({denominator})")
                } else {
                    format!("{top}/{denominator}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_is_mass_times_acceleration() {
        assert_eq!(
            Dimension::MASS.mul(&Dimension::ACCELERATION),
            Some(Dimension::FORCE)
        );
    }

    #[test]
    fn test_quotient_and_power() {
        let speed = Dimension::LENGTH.div(&Dimension::TIME).unwrap();
        assert_eq!(speed.powi(2), Some(Dimension([0, 2, -2, 0, 0, 0, 0])));
        assert!(speed.div(&speed).unwrap().is_dimensionless());
    }

    #[test]
    fn test_exponents_out_of_range_are_rejected() {
        let huge = Dimension::LENGTH.powi(127).unwrap();
        assert_eq!(huge.mul(&huge), None);
        assert_eq!(huge.powi(2), None);
        assert_eq!(Dimension::LENGTH.div(&huge.powi(-1).unwrap()), None);
    }

    #[test]
    fn test_base_symbol_rendering() {
        assert_eq!(Dimension::FORCE.base_symbol(), "kg·m/s^2");
        assert_eq!(Dimension::FREQUENCY.base_symbol(), "1/s");
        assert_eq!(Dimension::PRESSURE.base_symbol(), "kg/(m·s^2)");
        assert_eq!(Dimension::NONE.base_symbol(), "");
    }
}
