use core::fmt;
use std::rc::Rc;

use crate::algebra::field::{CoefficientField, FieldElement};
use crate::error::{FieldError, FieldResult};
use crate::structures::fp::PrimeField;

/// A single term `coeff * x^degree`.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial<C> {
    pub coeff: C,
    pub degree: usize,
}

impl<C: FieldElement> Monomial<C> {
    pub fn new(coeff: C, degree: usize) -> Self {
        Self { coeff, degree }
    }

    /// Multiply the coefficient by a scalar.
    pub fn scale(&self, c: &C) -> FieldResult<Self> {
        Ok(Self::new(self.coeff.try_mul(c)?, self.degree))
    }

    /// Product of two terms: coefficients multiply, degrees add.
    pub fn try_mul(&self, rhs: &Self) -> FieldResult<Self> {
        Ok(Self::new(
            self.coeff.try_mul(&rhs.coeff)?,
            self.degree + rhs.degree,
        ))
    }
}

/// Polynomial over a [`CoefficientField`].
///
/// Terms are stored as a list of [`Monomial`]s with at most one entry per
/// degree. The list may contain zero coefficients and need not be sorted;
/// [`trim`](Self::trim) brings it into canonical form (no zero terms,
/// ascending degree). Equality is by value and ignores storage layout.
///
/// # Example
///
/// ```
/// use galoisgen::{Polynomial, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
///
/// // (x^3 + 1) / (x + 1) = x^2 + x + 1 over GF(2)
/// let a = Polynomial::from_values(&f2, &[1, 0, 0, 1]);
/// let b = Polynomial::from_values(&f2, &[1, 1]);
/// let (q, r) = a.div_rem(&b).unwrap();
///
/// assert_eq!(q.to_string(), "x^2 + x + 1");
/// assert!(r.is_zero());
/// ```
pub struct Polynomial<F: CoefficientField> {
    monomials: Vec<Monomial<F::Element>>,
    field: Rc<F>,
}

impl<F: CoefficientField> Polynomial<F> {
    /// The zero polynomial.
    pub fn zero(field: &Rc<F>) -> Self {
        Self {
            monomials: Vec::new(),
            field: Rc::clone(field),
        }
    }

    /// The constant polynomial `1`.
    pub fn one(field: &Rc<F>) -> Self {
        Self {
            monomials: vec![Monomial::new(field.one(), 0)],
            field: Rc::clone(field),
        }
    }

    /// Build from coefficients in ascending order: `coeffs[i]` is the
    /// coefficient of `x^i`. Zero coefficients are kept as stored terms.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::FieldMismatch` if a coefficient belongs to another
    /// field instance.
    pub fn from_coefficients(field: &Rc<F>, coeffs: Vec<F::Element>) -> FieldResult<Self> {
        if coeffs.iter().any(|c| !field.owns(c)) {
            return Err(FieldError::FieldMismatch);
        }
        let monomials = coeffs
            .into_iter()
            .enumerate()
            .map(|(degree, coeff)| Monomial::new(coeff, degree))
            .collect();
        Ok(Self {
            monomials,
            field: Rc::clone(field),
        })
    }

    /// The polynomial `coeff * x^degree`.
    pub fn monomial(field: &Rc<F>, coeff: F::Element, degree: usize) -> FieldResult<Self> {
        let mut poly = Self::zero(field);
        poly.set_coeff_at(degree, coeff)?;
        Ok(poly)
    }

    /// The coefficient field.
    pub fn field(&self) -> &Rc<F> {
        &self.field
    }

    /// Stored terms, in storage order.
    pub fn monomials(&self) -> &[Monomial<F::Element>] {
        &self.monomials
    }

    /// Highest degree with a non-zero coefficient.
    ///
    /// Returns `None` for the zero polynomial, which keeps it distinct from
    /// non-zero constants (degree 0).
    pub fn degree(&self) -> Option<usize> {
        self.terms().map(|m| m.degree).max()
    }

    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// `true` if this polynomial is the constant `c`.
    pub fn is_coeff(&self, c: &F::Element) -> bool {
        match self.degree() {
            None | Some(0) => self.coeff_at(0) == *c,
            Some(_) => false,
        }
    }

    /// Coefficient of the highest-degree term, `None` for zero.
    pub fn leading_coeff(&self) -> Option<F::Element> {
        self.degree().map(|d| self.coeff_at(d))
    }

    /// Coefficient of `x^degree`; zero when no such term is stored.
    pub fn coeff_at(&self, degree: usize) -> F::Element {
        self.monomials
            .iter()
            .find(|m| m.degree == degree)
            .map(|m| m.coeff.clone())
            .unwrap_or_else(|| self.field.zero())
    }

    /// Replace the coefficient of `x^degree`, inserting the term if absent.
    pub fn set_coeff_at(&mut self, degree: usize, coeff: F::Element) -> FieldResult<()> {
        if !self.field.owns(&coeff) {
            return Err(FieldError::FieldMismatch);
        }
        match self.monomials.iter_mut().find(|m| m.degree == degree) {
            Some(m) => m.coeff = coeff,
            None => self.monomials.push(Monomial::new(coeff, degree)),
        }
        Ok(())
    }

    /// Reset to the zero polynomial.
    pub fn clear(&mut self) {
        self.monomials.clear();
    }

    /// Dense coefficients for degrees `0..=degree`; empty for zero.
    pub fn coefficients(&self) -> Vec<F::Element> {
        match self.degree() {
            Some(d) => (0..=d).map(|i| self.coeff_at(i)).collect(),
            None => Vec::new(),
        }
    }

    /// `self + rhs`.
    pub fn try_add(&self, rhs: &Self) -> FieldResult<Self> {
        let mut sum = self.clone();
        sum.add_assign_checked(rhs)?;
        Ok(sum)
    }

    /// `self += rhs`, coefficient-wise over `0..=max(deg self, deg rhs)`.
    pub fn add_assign_checked(&mut self, rhs: &Self) -> FieldResult<()> {
        self.check_same_field(rhs)?;
        let Some(max_degree) = self.degree().max(rhs.degree()) else {
            return Ok(());
        };
        for d in 0..=max_degree {
            let c = self.coeff_at(d).try_add(&rhs.coeff_at(d))?;
            self.set_coeff_at(d, c)?;
        }
        Ok(())
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &F::Element) -> FieldResult<Self> {
        let mut scaled = self.clone();
        scaled.scale_in_place(c)?;
        Ok(scaled)
    }

    pub fn scale_in_place(&mut self, c: &F::Element) -> FieldResult<()> {
        for m in &mut self.monomials {
            *m = m.scale(c)?;
        }
        Ok(())
    }

    /// Polynomial product by full convolution. The result is not trimmed.
    pub fn try_mul(&self, rhs: &Self) -> FieldResult<Self> {
        self.check_same_field(rhs)?;
        let (Some(lhs_degree), Some(rhs_degree)) = (self.degree(), rhs.degree()) else {
            return Ok(Self::zero(&self.field));
        };

        let mut acc = vec![self.field.zero(); lhs_degree + rhs_degree + 1];
        for a in self.terms() {
            for b in rhs.terms() {
                let term = a.try_mul(b)?;
                acc[term.degree] = acc[term.degree].try_add(&term.coeff)?;
            }
        }

        Self::from_coefficients(&self.field, acc)
    }

    /// Multiply by `x^shift`.
    pub fn shift_degrees(&self, shift: usize) -> Self {
        let mut shifted = self.clone();
        shifted.shift_in_place(shift);
        shifted
    }

    pub fn shift_in_place(&mut self, shift: usize) {
        for m in &mut self.monomials {
            m.degree += shift;
        }
    }

    /// Euclidean division, writing the remainder into `remainder`.
    ///
    /// Returns the quotient `q` with `self = q * divisor + r` and
    /// `deg r < deg divisor` (or `r` zero).
    ///
    /// # Errors
    ///
    /// - `NonZeroRemainder` if `remainder` is not the zero polynomial on entry.
    /// - `ZeroDivisor` if `divisor` is the zero polynomial.
    /// - `FieldMismatch` if the operands belong to different fields.
    pub fn div(&self, divisor: &Self, remainder: &mut Self) -> FieldResult<Self> {
        if !remainder.is_zero() {
            return Err(FieldError::NonZeroRemainder);
        }
        self.check_same_field(remainder)?;
        let (quotient, rest) = self.div_rem(divisor)?;
        *remainder = rest;
        Ok(quotient)
    }

    /// Euclidean division returning `(quotient, remainder)`.
    pub fn div_rem(&self, divisor: &Self) -> FieldResult<(Self, Self)> {
        self.check_same_field(divisor)?;
        let divisor_degree = divisor.degree().ok_or(FieldError::ZeroDivisor)?;
        let lead_inv = divisor.coeff_at(divisor_degree).multiplicative_inverse()?;

        let mut rest = self.clone();
        let mut quotient = Self::zero(&self.field);

        while let Some(rest_degree) = rest.degree() {
            if rest_degree < divisor_degree {
                break;
            }
            let shift = rest_degree - divisor_degree;
            let term = rest.coeff_at(rest_degree).try_mul(&lead_inv)?;
            quotient.set_coeff_at(shift, term.clone())?;

            // rest -= term * x^shift * divisor, which cancels the leading term
            let mut step = divisor.shift_degrees(shift);
            step.scale_in_place(&term.additive_inverse())?;
            rest.add_assign_checked(&step)?;
        }

        Ok((quotient, rest))
    }

    /// Remainder of division by `modulus`.
    pub fn rem(&self, modulus: &Self) -> FieldResult<Self> {
        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// `self^exp`; `pow(0)` is the constant `1`.
    pub fn pow(&self, exp: u64) -> FieldResult<Self> {
        let mut base = self.clone();
        let mut result = Self::one(&self.field);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// `self^exp mod modulus`, reducing after every product.
    ///
    /// Equal to `self.pow(exp)?.rem(modulus)` without the intermediate
    /// degree blow-up.
    pub fn pow_mod(&self, exp: u64, modulus: &Self) -> FieldResult<Self> {
        let mut base = self.rem(modulus)?;
        let mut result = Self::one(&self.field).rem(modulus)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.try_mul(&base)?.rem(modulus)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.try_mul(&base)?.rem(modulus)?;
            }
        }
        Ok(result)
    }

    /// Drop zero terms and sort by ascending degree.
    pub fn trim(&mut self) {
        self.monomials.retain(|m| !m.coeff.is_zero());
        self.monomials.shrink_to_fit();
        self.monomials.sort_by_key(|m| m.degree);
    }

    pub fn trimmed(&self) -> Self {
        let mut poly = self.clone();
        poly.trim();
        poly
    }

    /// Fixed-width rendering of the coefficients of degrees `0..width`,
    /// concatenated without separators.
    ///
    /// ```
    /// use galoisgen::{Polynomial, PrimeField};
    ///
    /// let f2 = PrimeField::new(2).unwrap();
    /// let f = Polynomial::from_values(&f2, &[1, 0, 1, 1]);
    /// assert_eq!(f.vector_form(4).to_string(), "1011");
    /// assert_eq!(f.vector_form(6).to_string(), "101100");
    /// ```
    pub fn vector_form(&self, width: usize) -> VectorForm<'_, F> {
        VectorForm { poly: self, width }
    }

    /// Non-zero terms.
    fn terms(&self) -> impl Iterator<Item = &Monomial<F::Element>> {
        self.monomials.iter().filter(|m| !m.coeff.is_zero())
    }

    fn check_same_field(&self, other: &Self) -> FieldResult<()> {
        if Rc::ptr_eq(&self.field, &other.field) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }
}

impl Polynomial<PrimeField> {
    /// Build from integer coefficients in ascending order, each reduced mod `p`.
    pub fn from_values(field: &Rc<PrimeField>, values: &[u64]) -> Self {
        let monomials = values
            .iter()
            .enumerate()
            .map(|(degree, &v)| Monomial::new(field.element(v), degree))
            .collect();
        Self {
            monomials,
            field: Rc::clone(field),
        }
    }

    /// Dense integer coefficients for degrees `0..=degree`.
    pub fn to_values(&self) -> Vec<u64> {
        self.coefficients().iter().map(|c| c.value()).collect()
    }
}

impl<F: CoefficientField> Clone for Polynomial<F> {
    fn clone(&self) -> Self {
        Self {
            monomials: self.monomials.clone(),
            field: Rc::clone(&self.field),
        }
    }
}

impl<F: CoefficientField> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.field, &other.field) || self.field == other.field)
            && self.degree() == other.degree()
            && self
                .degree()
                .map_or(true, |d| (0..=d).all(|i| self.coeff_at(i) == other.coeff_at(i)))
    }
}

impl<F: CoefficientField> fmt::Debug for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("monomials", &self.monomials)
            .finish()
    }
}

/// Algebraic form in descending degree: `2x^3 + x + 1`.
///
/// Zero terms are omitted, a coefficient of one is shown only on the
/// constant term, and exponents 0 and 1 are not written.
impl<F: CoefficientField> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "{}", self.field.zero());
        };

        let one = self.field.one();
        let mut first = true;
        for d in (0..=degree).rev() {
            let c = self.coeff_at(d);
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if c != one || d == 0 {
                write!(f, "{}", c)?;
            }
            match d {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", d)?,
            }
        }
        Ok(())
    }
}

/// See [`Polynomial::vector_form`].
pub struct VectorForm<'a, F: CoefficientField> {
    poly: &'a Polynomial<F>,
    width: usize,
}

impl<F: CoefficientField> fmt::Display for VectorForm<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in 0..self.width {
            write!(f, "{}", self.poly.coeff_at(d))?;
        }
        Ok(())
    }
}

/// Serialize as the dense coefficient vector.
///
/// Like field elements, polynomials are serialize-only: rebuilding one needs
/// the field handle. See [`FieldConfig`](crate::FieldConfig) for a
/// self-contained form.
#[cfg(feature = "serde")]
impl<F> serde::Serialize for Polynomial<F>
where
    F: CoefficientField,
    F::Element: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.coefficients())
    }
}
