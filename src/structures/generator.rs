//! Enumeration of every element of GF(p^m).

use core::iter::FusedIterator;
use std::rc::Rc;

use crate::structures::fp::PrimeField;
use crate::structures::poly::Polynomial;

/// Iterator over all `p^m` coefficient vectors of length `m`.
///
/// The vector is a base-`p` counter: the constant coefficient increments
/// fastest and carries into higher degrees. Enumeration starts at the zero
/// vector and ends after `(p-1, ..., p-1)`, when the counter wraps back to
/// zero. Each item is an untrimmed polynomial with exactly `m` stored terms.
///
/// # Example
///
/// ```
/// use galoisgen::{ElementGenerator, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let values: Vec<Vec<u64>> = ElementGenerator::new(&f2, 2)
///     .map(|p| p.monomials().iter().map(|m| m.coeff.value()).collect())
///     .collect();
/// assert_eq!(values, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct ElementGenerator {
    field: Rc<PrimeField>,
    digits: Vec<u64>,
    remaining: u128,
}

impl ElementGenerator {
    pub fn new(field: &Rc<PrimeField>, m: usize) -> Self {
        let mut generator = Self {
            field: Rc::clone(field),
            digits: vec![0; m],
            remaining: 0,
        };
        generator.reset();
        generator
    }

    /// Restart from the zero vector.
    pub fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.remaining = (0..self.digits.len())
            .try_fold(1u128, |acc, _| acc.checked_mul(self.field.order() as u128))
            .unwrap_or(u128::MAX);
    }

    /// `true` once the counter has wrapped back to zero.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// The coefficient vector the next call to `next` will yield.
    pub fn digits(&self) -> &[u64] {
        &self.digits
    }

    /// Mixed-radix increment; returns `true` when the counter wraps.
    fn advance(&mut self) -> bool {
        let p = self.field.order();
        for digit in &mut self.digits {
            *digit += 1;
            if *digit < p {
                return false;
            }
            *digit = 0;
        }
        true
    }
}

impl Iterator for ElementGenerator {
    type Item = Polynomial<PrimeField>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let current = Polynomial::from_values(&self.field, &self.digits);
        if self.advance() {
            self.remaining = 0;
        } else {
            self.remaining -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ElementGenerator {}
