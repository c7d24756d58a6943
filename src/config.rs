//! Caller-facing description of a field and the search to run on it.

use crate::error::{ConfigError, FieldError};
use crate::structures::gf::{FiniteField, SearchOptions};
use crate::utils::{field_order, is_prime};

/// Everything needed to build GF(p^m) and search it.
///
/// `modulus` holds the `m + 1` coefficients of the irreducible polynomial in
/// ascending degree order.
///
/// # Example
///
/// ```
/// use galoisgen::FieldConfig;
///
/// let config = FieldConfig::from_digits(2, 3, "1011").unwrap();
/// let mut field = config.build().unwrap();
/// let report = field.find_primitive_element(config.search_options()).unwrap();
/// assert_eq!(report.primitive.to_string(), "x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    pub prime: u64,
    pub degree: usize,
    pub modulus: Vec<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbose: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub all_degrees: bool,
}

impl FieldConfig {
    pub fn new(prime: u64, degree: usize, modulus: Vec<u64>) -> Self {
        Self {
            prime,
            degree,
            modulus,
            verbose: false,
            all_degrees: false,
        }
    }

    /// Like [`new`](Self::new), with the modulus in string notation.
    /// See [`parse_coefficients`].
    pub fn from_digits(prime: u64, degree: usize, modulus: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(prime, degree, parse_coefficients(modulus)?))
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn all_degrees(mut self, all_degrees: bool) -> Self {
        self.all_degrees = all_degrees;
        self
    }

    /// Check the record without building anything.
    ///
    /// # Errors
    ///
    /// - `NotPrime`, `ZeroDegree` or `OrderOverflow` for a bad `(p, m)`.
    /// - `CoefficientCount` unless there are exactly `m + 1` coefficients.
    /// - `CoefficientOutOfRange` for a coefficient `>= p`.
    /// - `WrongDegree` if the leading coefficient is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_prime(self.prime) {
            return Err(FieldError::NotPrime(self.prime).into());
        }
        if self.degree == 0 {
            return Err(FieldError::ZeroDegree.into());
        }
        if field_order(self.prime, self.degree).is_none() {
            return Err(FieldError::OrderOverflow {
                p: self.prime,
                m: self.degree,
            }
            .into());
        }
        if self.modulus.len() != self.degree + 1 {
            return Err(ConfigError::CoefficientCount {
                expected: self.degree + 1,
                got: self.modulus.len(),
            });
        }
        if let Some((position, &value)) = self
            .modulus
            .iter()
            .enumerate()
            .find(|(_, &c)| c >= self.prime)
        {
            return Err(FieldError::CoefficientOutOfRange {
                position,
                value,
                prime: self.prime,
            }
            .into());
        }
        if self.modulus[self.degree] == 0 {
            let got = self.modulus.iter().rposition(|&c| c != 0);
            return Err(FieldError::WrongDegree {
                expected: self.degree,
                got,
            }
            .into());
        }
        Ok(())
    }

    /// Validate, then create the field with its modulus set.
    pub fn build(&self) -> Result<FiniteField, ConfigError> {
        self.validate()?;
        Ok(FiniteField::with_modulus(self.prime, self.degree, &self.modulus)?)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            verbose: self.verbose,
            all_degrees: self.all_degrees,
        }
    }
}

/// Parse polynomial coefficients in ascending degree order.
///
/// Without separators every character is one decimal digit, so `"1011"` is
/// `1 + x^2 + x^3`. With commas or whitespace each token is a whole number,
/// which allows coefficients of 10 and above: `"1, 12, 0, 3"`.
///
/// # Errors
///
/// - `EmptyPolynomial` if there are no coefficients.
/// - `InvalidDigit` for any other character; `position` is its char index
///   after surrounding whitespace is trimmed.
pub fn parse_coefficients(input: &str) -> Result<Vec<u64>, ConfigError> {
    let trimmed = input.trim();
    let separated = trimmed.chars().any(|c| c == ',' || c.is_whitespace());

    let coeffs = if separated {
        parse_tokens(trimmed)?
    } else {
        trimmed
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(10)
                    .map(u64::from)
                    .ok_or(ConfigError::InvalidDigit { ch, position })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if coeffs.is_empty() {
        return Err(ConfigError::EmptyPolynomial);
    }
    Ok(coeffs)
}

fn parse_tokens(input: &str) -> Result<Vec<u64>, ConfigError> {
    let mut coeffs = Vec::new();
    let mut current: Option<u64> = None;

    for (position, ch) in input.chars().enumerate() {
        if ch == ',' || ch.is_whitespace() {
            coeffs.extend(current.take());
            continue;
        }
        let digit = ch
            .to_digit(10)
            .ok_or(ConfigError::InvalidDigit { ch, position })?;
        let value = current
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(ConfigError::InvalidDigit { ch, position })?;
        current = Some(value);
    }
    coeffs.extend(current);
    Ok(coeffs)
}
