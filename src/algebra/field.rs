use core::fmt;
use std::rc::Rc;

use crate::error::FieldResult;

/// A field whose elements keep a shared handle back to it.
///
/// Fields are created once and handed out as `Rc<Self>`; every element and
/// polynomial built from a field holds a clone of that handle. Two handles
/// denote the same field only when they point at the same allocation.
pub trait CoefficientField: fmt::Debug + PartialEq {
    type Element: FieldElement;

    /// Additive identity.
    fn zero(self: &Rc<Self>) -> Self::Element;

    /// Multiplicative identity.
    fn one(self: &Rc<Self>) -> Self::Element;

    /// `true` if `element` was created from this exact field instance.
    fn owns(self: &Rc<Self>, element: &Self::Element) -> bool;
}

/// Element of a [`CoefficientField`].
///
/// Binary operations fail with [`FieldError::FieldMismatch`] when the operands
/// come from different field instances.
///
/// [`FieldError::FieldMismatch`]: crate::FieldError::FieldMismatch
pub trait FieldElement: Clone + PartialEq + fmt::Debug + fmt::Display {
    fn is_zero(&self) -> bool;

    fn try_add(&self, rhs: &Self) -> FieldResult<Self>;

    fn try_mul(&self, rhs: &Self) -> FieldResult<Self>;

    /// `-a`, so that `a + (-a) = 0`.
    fn additive_inverse(&self) -> Self;

    /// `a⁻¹`, so that `a * a⁻¹ = 1`.
    ///
    /// Fails with `ZeroInverse` when `self` is zero.
    fn multiplicative_inverse(&self) -> FieldResult<Self>;

    #[inline]
    fn try_sub(&self, rhs: &Self) -> FieldResult<Self> {
        self.try_add(&rhs.additive_inverse())
    }

    /// `self * rhs⁻¹`; division by zero fails with `ZeroInverse`.
    #[inline]
    fn try_div(&self, rhs: &Self) -> FieldResult<Self> {
        self.try_mul(&rhs.multiplicative_inverse()?)
    }
}
