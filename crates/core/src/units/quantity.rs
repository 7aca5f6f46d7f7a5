//! Unit-bearing quantities and the unit-expression parser
//!
//! A [`Quantity`] pairs a numeric value with a [`Unit`] (display label, scale
//! into SI base units, dimension). The parser accepts the notation callers
//! actually write: `100 g`, `5N`, `40 m kg2 / s2`, `kg·m/s^2`, `m/s**2`,
//! with `+ - * / ^` arithmetic, parentheses, and implicit multiplication by
//! juxtaposition.
//!
//! Arithmetic is dimension-checked: addition and subtraction require equal
//! dimensions (the right operand is rescaled into the left operand's unit),
//! while products and quotients combine dimensions. Internal computation is
//! full `f64` precision; rounding happens only in [`format_sig`] at the
//! formatting boundary.

use std::fmt;

use crate::error::{Error, Result};
use crate::units::dimension::Dimension;
use crate::units::registry;

/// A resolved unit: human-readable label plus scale and dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Display label, e.g. `g`, `m/s^2`, `kg·m/s^2`.
    pub label: String,
    /// Multiplicative factor into SI base units.
    pub factor: f64,
    /// Physical dimension.
    pub dim: Dimension,
}

impl Unit {
    /// The dimensionless identity unit (empty label, factor 1).
    pub fn dimensionless() -> Unit {
        Unit {
            label: String::new(),
            factor: 1.0,
            dim: Dimension::NONE,
        }
    }
}

/// A numeric value with a physical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// Numeric magnitude, expressed in `unit`.
    pub value: f64,
    /// The unit the magnitude is expressed in.
    pub unit: Unit,
}

impl Quantity {
    /// Build a dimensionless quantity.
    pub fn dimensionless(value: f64) -> Quantity {
        Quantity {
            value,
            unit: Unit::dimensionless(),
        }
    }

    /// Parse a quantity expression such as `100 g`, `5N * 8kg` or `kg·m/s^2`.
    ///
    /// A bare unit expression parses with magnitude 1, so `parse("N")` is the
    /// quantity "one newton".
    ///
    /// # Errors
    /// [`Error::UnitParse`] on unknown unit tokens or malformed syntax, and
    /// [`Error::DimensionMismatch`] if the expression adds or subtracts
    /// incompatible dimensions.
    pub fn parse(text: &str) -> Result<Quantity> {
        Parser::new(text)?.parse()
    }

    /// Convert into the unit described by `to_unit`.
    ///
    /// The numeric result preserves magnitude under exact dimensional scaling;
    /// nothing is coerced across dimensions.
    ///
    /// # Errors
    /// [`Error::UnitParse`] if `to_unit` does not parse, and
    /// [`Error::DimensionMismatch`] if its dimension differs from `self`'s.
    pub fn convert(&self, to_unit: &str) -> Result<Quantity> {
        let target = Quantity::parse(to_unit)?;
        if target.unit.dim != self.unit.dim {
            return Err(Error::DimensionMismatch {
                from: self.describe_unit(),
                to: to_unit.trim().to_string(),
            });
        }
        // A numeric factor in the target ("2 m") scales into the result.
        let scale = self.unit.factor / (target.value * target.unit.factor);
        Ok(Quantity {
            value: self.value * scale,
            unit: Unit {
                label: to_unit.trim().to_string(),
                factor: target.value * target.unit.factor,
                dim: target.unit.dim,
            },
        })
    }

    /// Rewrite into the product of SI base units with integer powers.
    ///
    /// Idempotent: reducing an already-base quantity returns it unchanged,
    /// because the base label parses back to a factor of exactly 1.
    #[must_use]
    pub fn reduce_to_base(&self) -> Quantity {
        Quantity {
            value: self.value * self.unit.factor,
            unit: Unit {
                label: self.unit.dim.base_symbol(),
                factor: 1.0,
                dim: self.unit.dim,
            },
        }
    }

    /// Unit label for error messages; `dimensionless` when the label is empty.
    fn describe_unit(&self) -> String {
        if self.unit.label.is_empty() {
            "dimensionless".to_string()
        } else {
            self.unit.label.clone()
        }
    }

    /// Add, rescaling `rhs` into `self`'s unit.
    fn add(&self, rhs: &Quantity) -> Result<Quantity> {
        self.combine_linear(rhs, 1.0)
    }

    /// Subtract, rescaling `rhs` into `self`'s unit.
    fn sub(&self, rhs: &Quantity) -> Result<Quantity> {
        self.combine_linear(rhs, -1.0)
    }

    fn combine_linear(&self, rhs: &Quantity, sign: f64) -> Result<Quantity> {
        if self.unit.dim != rhs.unit.dim {
            return Err(Error::DimensionMismatch {
                from: self.describe_unit(),
                to: rhs.describe_unit(),
            });
        }
        let rhs_in_self = rhs.value * rhs.unit.factor / self.unit.factor;
        Ok(Quantity {
            value: sign.mul_add(rhs_in_self, self.value),
            unit: self.unit.clone(),
        })
    }

    /// Multiply; labels join with `·`.
    fn mul(&self, rhs: &Quantity) -> Result<Quantity> {
        let dim = self
            .unit
            .dim
            .mul(&rhs.unit.dim)
            .ok_or_else(exponent_out_of_range)?;
        Ok(Quantity {
            value: self.value * rhs.value,
            unit: Unit {
                label: join_labels(&self.unit.label, &rhs.unit.label, '·'),
                factor: self.unit.factor * rhs.unit.factor,
                dim,
            },
        })
    }

    /// Divide; labels join with `/`, parenthesizing composite denominators.
    fn div(&self, rhs: &Quantity) -> Result<Quantity> {
        let dim = self
            .unit
            .dim
            .div(&rhs.unit.dim)
            .ok_or_else(exponent_out_of_range)?;
        let label = if rhs.unit.label.is_empty() {
            self.unit.label.clone()
        } else {
            let top = if self.unit.label.is_empty() {
                "1"
            } else {
                &self.unit.label
            };
            format!("{top}/{}", parenthesize(&rhs.unit.label))
        };
        Ok(Quantity {
            value: self.value / rhs.value,
            unit: Unit {
                label,
                factor: self.unit.factor / rhs.unit.factor,
                dim,
            },
        })
    }

    /// Raise to a power. Integer exponents work for any dimension; fractional
    /// exponents only for dimensionless quantities.
    fn pow(&self, exponent: &Quantity) -> Result<Quantity> {
        if !exponent.unit.dim.is_dimensionless() {
            return Err(Error::UnitParse(
                "exponent must be dimensionless".to_string(),
            ));
        }
        let exp = exponent.value * exponent.unit.factor;
        let rounded = exp.round();
        if (exp - rounded).abs() < 1e-12 && rounded.abs() <= 127.0 {
            let n = rounded as i8;
            let dim = self.unit.dim.powi(n).ok_or_else(exponent_out_of_range)?;
            let label = if self.unit.label.is_empty() {
                String::new()
            } else {
                format!("{}^{n}", parenthesize(&self.unit.label))
            };
            return Ok(Quantity {
                value: self.value.powi(i32::from(n)),
                unit: Unit {
                    label,
                    factor: self.unit.factor.powi(i32::from(n)),
                    dim,
                },
            });
        }
        if self.unit.dim.is_dimensionless() {
            return Ok(Quantity::dimensionless(
                (self.value * self.unit.factor).powf(exp),
            ));
        }
        Err(Error::UnitParse(
            "fractional exponent on a dimensioned quantity".to_string(),
        ))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.label.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.label)
        }
    }
}

fn exponent_out_of_range() -> Error {
    Error::UnitParse("unit exponent out of range".to_string())
}

fn join_labels(a: &str, b: &str, sep: char) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => String::new(),
        (false, true) => a.to_string(),
        (true, false) => b.to_string(),
        (false, false) => format!("{a}{sep}{b}"),
    }
}

/// Wrap composite labels in parentheses so `kg/(m·s)` reads unambiguously.
fn parenthesize(label: &str) -> String {
    if label.contains('·') || label.contains('/') || label.contains('^') {
        format!("({label})")
    } else {
        label.to_string()
    }
}

/// Format a value with `digits` significant digits (printf `%g` semantics):
/// fixed notation in the mid range, scientific outside it, trailing zeros
/// trimmed. Conversions use 6 digits, derived physics results 4.
pub fn format_sig(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp_str)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp_str.parse::<i32>() else {
        return sci;
    };
    if exp < -4 || exp >= digits as i32 {
        format!("{}e{exp}", trim_trailing_zeros(mantissa))
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Expression parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// Precedence-climbing parser over quantity tokens.
///
/// Grammar, loosest to tightest: `+ -`, then `* /` and juxtaposition
/// (`5 N`, `40 m kg2`), then unary minus, then `^`/`**` (right-associative).
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(text: &str) -> Result<Parser> {
        Ok(Parser {
            tokens: tokenize(text)?,
            pos: 0,
        })
    }

    fn parse(mut self) -> Result<Quantity> {
        if self.tokens.is_empty() {
            return Err(Error::UnitParse("empty expression".to_string()));
        }
        let result = self.parse_expr()?;
        if let Some(tok) = self.peek() {
            return Err(Error::UnitParse(format!("unexpected token near {tok:?}")));
        }
        Ok(result)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_expr(&mut self) -> Result<Quantity> {
        let mut lhs = self.parse_term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.pos += 1;
                    let rhs = self.parse_term()?;
                    lhs = lhs.add(&rhs)?;
                }
                Token::Minus => {
                    self.pos += 1;
                    let rhs = self.parse_term()?;
                    lhs = lhs.sub(&rhs)?;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Quantity> {
        let mut lhs = self.parse_unary()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Star => {
                    self.pos += 1;
                    let rhs = self.parse_unary()?;
                    lhs = lhs.mul(&rhs)?;
                }
                Token::Slash => {
                    self.pos += 1;
                    let rhs = self.parse_unary()?;
                    lhs = lhs.div(&rhs)?;
                }
                // Juxtaposition is multiplication: `5 N`, `m kg`, `2(3)`
                Token::Num(_) | Token::Ident(_) | Token::LParen => {
                    let rhs = self.parse_unary()?;
                    lhs = lhs.mul(&rhs)?;
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Quantity> {
        if self.peek() == Some(&Token::Minus) {
            self.pos += 1;
            let mut inner = self.parse_unary()?;
            inner.value = -inner.value;
            return Ok(inner);
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Quantity> {
        let base = self.parse_atom()?;
        if self.peek() == Some(&Token::Caret) {
            self.pos += 1;
            // Right-associative, and unary minus binds to the exponent
            let exponent = self.parse_unary()?;
            return base.pow(&exponent);
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Quantity> {
        match self.bump() {
            Some(Token::Num(n)) => Ok(Quantity::dimensionless(n)),
            Some(Token::Ident(name)) => {
                let def = registry::lookup(&name)
                    .ok_or_else(|| Error::UnitParse(format!("unknown unit '{name}'")))?;
                Ok(Quantity {
                    value: 1.0,
                    unit: Unit {
                        label: name,
                        factor: def.factor,
                        dim: def.dim,
                    },
                })
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                if self.bump() != Some(Token::RParen) {
                    return Err(Error::UnitParse("missing closing parenthesis".to_string()));
                }
                Ok(inner)
            }
            Some(tok) => Err(Error::UnitParse(format!("unexpected token {tok:?}"))),
            None => Err(Error::UnitParse("unexpected end of expression".to_string())),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\n' | '\r' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                // `**` is exponentiation, `*` multiplication
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Caret);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '·' | '×' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            // Unicode superscripts appear in pasted unit text (m/s²)
            '²' => {
                tokens.push(Token::Caret);
                tokens.push(Token::Num(2.0));
                i += 1;
            }
            '³' => {
                tokens.push(Token::Caret);
                tokens.push(Token::Num(3.0));
                i += 1;
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Scientific notation: 1e3, 2.5E-4
                if i < chars.len()
                    && (chars[i] == 'e' || chars[i] == 'E')
                    && chars
                        .get(i + 1)
                        .is_some_and(|n| n.is_ascii_digit() || *n == '+' || *n == '-')
                {
                    i += 2;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| Error::UnitParse(format!("malformed number '{text}'")))?;
                tokens.push(Token::Num(value));
            }
            _ if c.is_alphabetic() || c == 'µ' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphabetic() || chars[i] == 'µ') {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push(Token::Ident(name));
                // Attached trailing digits are an exponent: `kg2`, `s2`
                if i < chars.len() && chars[i].is_ascii_digit() {
                    let dstart = i;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    let digits: String = chars[dstart..i].iter().collect();
                    let value = digits
                        .parse::<f64>()
                        .map_err(|_| Error::UnitParse(format!("malformed exponent '{digits}'")))?;
                    tokens.push(Token::Caret);
                    tokens.push(Token::Num(value));
                }
            }
            _ => {
                return Err(Error::UnitParse(format!("unexpected character '{c}'")));
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value_with_unit() {
        let q = Quantity::parse("100 g").unwrap();
        assert_eq!(q.value, 100.0);
        assert_eq!(q.unit.label, "g");
        assert_eq!(q.unit.dim, Dimension::MASS);

        // No space and spelled-out names both work
        let q = Quantity::parse("5N").unwrap();
        assert_eq!(q.unit.dim, Dimension::FORCE);
        let q = Quantity::parse("2 kilograms").unwrap();
        assert_eq!(q.unit.factor, 1.0);
    }

    #[test]
    fn test_parse_compound_notations() {
        // All spellings of force should agree dimensionally
        for text in ["kg·m/s^2", "kg*m/s**2", "kg m / s2", "kg·m/s²"] {
            let q = Quantity::parse(text).unwrap();
            assert_eq!(q.unit.dim, Dimension::FORCE, "failed for {text}");
            assert_relative_eq!(q.unit.factor, 1.0);
        }
        // The original's exponent-suffix style: 40 m kg2 / s2
        let q = Quantity::parse("40 m kg2 / s2").unwrap();
        assert_eq!(q.value, 40.0);
        assert_eq!(q.unit.dim.base_symbol(), "kg^2·m/s^2");
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let err = Quantity::parse("12 blorf").unwrap_err();
        assert!(matches!(err, Error::UnitParse(_)));
        assert!(err.to_string().contains("blorf"));
    }

    #[test]
    fn test_convert_exact_scaling() {
        let q = Quantity::parse("100 g").unwrap();
        let kg = q.convert("kg").unwrap();
        assert_relative_eq!(kg.value, 0.1);

        let cm = Quantity::parse("15 cm").unwrap().convert("m").unwrap();
        assert_relative_eq!(cm.value, 0.15);
    }

    #[test]
    fn test_convert_round_trip_recovers_magnitude() {
        for (text, to) in [("2.5 kg", "g"), ("9.81 m/s^2", "km/h/s"), ("3 N", "dyn")] {
            let q = Quantity::parse(text).unwrap();
            let back = q.convert(to).unwrap().convert(&q.unit.label).unwrap();
            assert_relative_eq!(back.value, q.value, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_convert_rejects_incompatible_dimension() {
        let q = Quantity::parse("5 kg").unwrap();
        let err = q.convert("m").unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_reduce_to_base_is_idempotent() {
        let q = Quantity::parse("3 N").unwrap();
        let base = q.reduce_to_base();
        assert_eq!(base.unit.label, "kg·m/s^2");
        assert_relative_eq!(base.value, 3.0);
        assert_eq!(base.reduce_to_base(), base);
    }

    #[test]
    fn test_dimension_checked_addition() {
        // Same dimension: rhs rescales into lhs's unit
        let sum = Quantity::parse("1 kg + 500 g").unwrap();
        assert_relative_eq!(sum.value, 1.5);
        assert_eq!(sum.unit.label, "kg");

        // Different dimensions fail loudly
        let err = Quantity::parse("1 kg + 1 m").unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_product_combines_units() {
        let force = Quantity::parse("5N * 8kg").unwrap();
        assert_relative_eq!(force.value, 40.0);
        assert_eq!(
            force.unit.dim,
            Dimension::FORCE.mul(&Dimension::MASS).unwrap()
        );
        assert_eq!(force.unit.label, "N·kg");
    }

    #[test]
    fn test_extreme_exponents_fail_instead_of_wrapping() {
        // Exponents past the representable range must surface as parse
        // errors, never as a silently wrong dimension
        for text in ["m^127 * m^127", "(m^8)^16", "m^127 / s^127 / s^127"] {
            let err = Quantity::parse(text).unwrap_err();
            assert!(matches!(err, Error::UnitParse(_)), "failed for {text}");
            assert!(err.to_string().contains("exponent out of range"));
        }
    }

    #[test]
    fn test_format_sig() {
        assert_eq!(format_sig(0.1, 6), "0.1");
        assert_eq!(format_sig(98.0, 4), "98");
        assert_eq!(format_sig(42.43524478543749, 4), "42.44");
        assert_eq!(format_sig(1234567.0, 6), "1.23457e6");
        assert_eq!(format_sig(0.000012345, 6), "1.2345e-5");
        assert_eq!(format_sig(0.0, 6), "0");
        assert_eq!(format_sig(-9.48683, 4), "-9.487");
    }
}
