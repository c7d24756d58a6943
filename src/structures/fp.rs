//! The prime field GF(p) with an order chosen at runtime.
//!
//! A [`PrimeField`] is created once and shared through `Rc`. Each
//! [`PrimeFieldElement`] holds a clone of that handle, so elements of
//! different field instances are detected and never silently mixed.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};
use std::rc::Rc;

use crate::algebra::field::{CoefficientField, FieldElement};
use crate::error::{FieldError, FieldResult};
use crate::utils::is_prime;

/// Prime field GF(p) where `p` is a `u64`-sized prime.
///
/// # Example
///
/// ```
/// use galoisgen::PrimeField;
///
/// let f7 = PrimeField::new(7).unwrap();
/// let a = f7.element(5);
/// let b = f7.element(4);
/// assert_eq!((&a + &b).value(), 2);
/// assert_eq!((&a * &b).value(), 6);
///
/// assert!(PrimeField::new(15).is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    order: u64,
}

impl PrimeField {
    /// Create the field GF(`order`).
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotPrime` if `order` is not a prime.
    pub fn new(order: u64) -> FieldResult<Rc<Self>> {
        if !is_prime(order) {
            return Err(FieldError::NotPrime(order));
        }
        Ok(Rc::new(Self { order }))
    }

    /// The prime `p`.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The element `value mod p`.
    pub fn element(self: &Rc<Self>, value: u64) -> PrimeFieldElement {
        PrimeFieldElement {
            value: value % self.order,
            field: Rc::clone(self),
        }
    }

    pub fn zero(self: &Rc<Self>) -> PrimeFieldElement {
        self.element(0)
    }

    pub fn one(self: &Rc<Self>) -> PrimeFieldElement {
        self.element(1)
    }

    /// The largest element, `p - 1`.
    pub fn last(self: &Rc<Self>) -> PrimeFieldElement {
        self.element(self.order - 1)
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(self: &Rc<Self>, rng: &mut R) -> PrimeFieldElement {
        self.element(rng.gen_range(0..self.order))
    }
}

impl CoefficientField for PrimeField {
    type Element = PrimeFieldElement;

    fn zero(self: &Rc<Self>) -> PrimeFieldElement {
        self.element(0)
    }

    fn one(self: &Rc<Self>) -> PrimeFieldElement {
        self.element(1)
    }

    fn owns(self: &Rc<Self>, element: &PrimeFieldElement) -> bool {
        Rc::ptr_eq(self, &element.field)
    }
}

/// Element of a [`PrimeField`], always reduced into `[0, p-1]`.
#[derive(Clone)]
pub struct PrimeFieldElement {
    value: u64,
    field: Rc<PrimeField>,
}

impl PrimeFieldElement {
    /// The representative in `[0, p-1]`.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &Rc<PrimeField> {
        &self.field
    }

    /// Replace the value, reducing it mod `p`.
    pub fn set_value(&mut self, value: u64) {
        self.value = value % self.field.order;
    }

    /// `self += rhs`.
    pub fn add_assign_checked(&mut self, rhs: &Self) -> FieldResult<()> {
        self.check_same_field(rhs)?;
        self.value = add_mod(self.value, rhs.value, self.field.order);
        Ok(())
    }

    /// `self *= rhs`.
    pub fn mul_assign_checked(&mut self, rhs: &Self) -> FieldResult<()> {
        self.check_same_field(rhs)?;
        self.value = mul_mod(self.value, rhs.value, self.field.order);
        Ok(())
    }

    /// Add one in place, wrapping from `p - 1` to `0`.
    pub fn increment(&mut self) {
        self.value = add_mod(self.value, 1, self.field.order);
    }

    fn check_same_field(&self, other: &Self) -> FieldResult<()> {
        if Rc::ptr_eq(&self.field, &other.field) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            Rc::ptr_eq(&self.field, &other.field),
            "PrimeFieldElement operands must belong to the same field"
        );
    }
}

#[inline]
fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + b as u128) % p as u128) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

impl FieldElement for PrimeFieldElement {
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn try_add(&self, rhs: &Self) -> FieldResult<Self> {
        let mut sum = self.clone();
        sum.add_assign_checked(rhs)?;
        Ok(sum)
    }

    fn try_mul(&self, rhs: &Self) -> FieldResult<Self> {
        let mut product = self.clone();
        product.mul_assign_checked(rhs)?;
        Ok(product)
    }

    fn additive_inverse(&self) -> Self {
        let p = self.field.order;
        Self {
            value: (p - self.value) % p,
            field: Rc::clone(&self.field),
        }
    }

    /// Brute-force search over `[1, p-1]` for the value whose product with
    /// `self` is one.
    fn multiplicative_inverse(&self) -> FieldResult<Self> {
        if self.value == 0 {
            return Err(FieldError::ZeroInverse);
        }
        let p = self.field.order;
        (1..p)
            .find(|&candidate| mul_mod(self.value, candidate, p) == 1)
            .map(|value| Self {
                value,
                field: Rc::clone(&self.field),
            })
            .ok_or(FieldError::ZeroInverse)
    }
}

/// Equality is by value: elements of two `PrimeField` instances with the
/// same order compare equal, even though arithmetic between them fails with
/// `FieldMismatch`. Polynomial equality relies on this.
impl PartialEq for PrimeFieldElement {
    fn eq(&self, other: &Self) -> bool {
        (Rc::ptr_eq(&self.field, &other.field) || self.field.order == other.field.order)
            && self.value == other.value
    }
}

impl Eq for PrimeFieldElement {}

impl Hash for PrimeFieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.order.hash(state);
        self.value.hash(state);
    }
}

/// Elements of different fields are unordered.
impl PartialOrd for PrimeFieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.field.order != other.field.order {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

impl fmt::Debug for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})({})", self.field.order, self.value)
    }
}

impl fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/* ---- Arithmetic operators ----
 *
 * These panic when the operands come from different fields; the
 * `try_*` methods of `FieldElement` return an error instead.
 */

impl Add for &PrimeFieldElement {
    type Output = PrimeFieldElement;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        PrimeFieldElement {
            value: add_mod(self.value, rhs.value, self.field.order),
            field: Rc::clone(&self.field),
        }
    }
}

impl Add for PrimeFieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &PrimeFieldElement {
    type Output = PrimeFieldElement;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &rhs.additive_inverse()
    }
}

impl Sub for PrimeFieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &PrimeFieldElement {
    type Output = PrimeFieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        PrimeFieldElement {
            value: mul_mod(self.value, rhs.value, self.field.order),
            field: Rc::clone(&self.field),
        }
    }
}

impl Mul for PrimeFieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for &PrimeFieldElement {
    type Output = PrimeFieldElement;

    fn neg(self) -> Self::Output {
        self.additive_inverse()
    }
}

impl Neg for PrimeFieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.additive_inverse()
    }
}

/// Serialize as the plain `u64` representative.
///
/// There is no `Deserialize`: an element cannot be rebuilt without its
/// field handle. Deserialize a `u64` and call [`PrimeField::element`].
#[cfg(feature = "serde")]
impl serde::Serialize for PrimeFieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.value)
    }
}


#[cfg(all(test, feature = "rand"))]
mod rand_tests {
    use super::*;

    #[test]
    fn random_in_range() {
        let f17 = PrimeField::new(17).unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let a = f17.random_element(&mut rng);
            assert!(a.value() < 17);
            assert!(f17.owns(&a));
        }
    }

    #[test]
    fn random_distribution() {
        let f17 = PrimeField::new(17).unwrap();
        let mut rng = rand::thread_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(f17.random_element(&mut rng).value());
        }
        assert!(seen.len() >= 15, "should see most field elements");
    }
}
