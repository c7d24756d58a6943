//! The extension field GF(p^m) and the primitive element search.
//!
//! Elements of GF(p^m) are polynomials over GF(p) of degree below `m`;
//! arithmetic is carried out modulo an irreducible polynomial of degree `m`
//! supplied by the caller. Irreducibility is a precondition and is not
//! verified here; a reducible modulus shows up as an exhausted search.

use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use crate::error::{FieldError, FieldResult};
use crate::structures::fp::PrimeField;
use crate::structures::generator::ElementGenerator;
use crate::structures::poly::Polynomial;
use crate::utils::{divisors, field_order};

/// An element of GF(p^m) in polynomial representation.
pub type Element = Polynomial<PrimeField>;

/// Lifecycle of a [`FiniteField`] with respect to the primitive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No irreducible polynomial yet.
    Uninitialized,
    /// Modulus set, no primitive element known.
    Ready,
    /// Candidates are being enumerated.
    Searching,
    /// A primitive element has been found.
    Found,
}

/// Caller switches for [`FiniteField::find_primitive_element`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Record `g^d mod f(x)` for every tested divisor in the report.
    pub verbose: bool,
    /// Reserved. Accepted and logged, does not change the result.
    pub all_degrees: bool,
}

/// One tested power: `candidate^exponent mod f(x) = residue`.
#[derive(Debug, Clone)]
pub struct PowerStep {
    pub candidate: Element,
    pub exponent: u64,
    pub residue: Element,
}

/// Outcome of a successful search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The first primitive element in enumeration order.
    pub primitive: Element,
    /// How many candidates were examined, the primitive one included.
    pub candidates_tested: u64,
    /// Every tested power, in order. Empty unless `verbose` was set.
    pub trace: Vec<PowerStep>,
}

/// The finite field GF(p^m).
///
/// # Example
///
/// ```
/// use galoisgen::{FiniteField, SearchOptions};
///
/// // GF(8) = GF(2)[x] / (1 + x^2 + x^3)
/// let mut field = FiniteField::with_modulus(2, 3, &[1, 0, 1, 1]).unwrap();
/// let report = field.find_primitive_element(SearchOptions::default()).unwrap();
///
/// assert_eq!(report.primitive.to_string(), "x");
/// assert_eq!(field.element_order(&report.primitive).unwrap(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct FiniteField {
    p: u64,
    m: usize,
    prime_field: Rc<PrimeField>,
    irreducible: Option<Element>,
    primitive: Option<Element>,
    state: SearchState,
}

impl FiniteField {
    /// Create GF(p^m) without a modulus.
    ///
    /// # Errors
    ///
    /// - `NotPrime` if `p` is not prime.
    /// - `ZeroDegree` if `m == 0`.
    /// - `OrderOverflow` if `p^m` does not fit in a `u64`.
    pub fn new(p: u64, m: usize) -> FieldResult<Self> {
        let prime_field = PrimeField::new(p)?;
        if m == 0 {
            return Err(FieldError::ZeroDegree);
        }
        if field_order(p, m).is_none() {
            return Err(FieldError::OrderOverflow { p, m });
        }
        Ok(Self {
            p,
            m,
            prime_field,
            irreducible: None,
            primitive: None,
            state: SearchState::Uninitialized,
        })
    }

    /// Create GF(p^m) and set the modulus from ascending coefficient digits.
    ///
    /// # Errors
    ///
    /// Everything [`new`](Self::new) and [`set_irreducible`](Self::set_irreducible)
    /// return, plus `CoefficientOutOfRange` for a digit `>= p`.
    pub fn with_modulus(p: u64, m: usize, coeffs: &[u64]) -> FieldResult<Self> {
        let mut field = Self::new(p, m)?;
        let modulus = field.polynomial(coeffs)?;
        field.set_irreducible(modulus)?;
        Ok(field)
    }

    /// The characteristic `p`.
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// The extension degree `m`.
    pub fn degree(&self) -> usize {
        self.m
    }

    /// The coefficient field GF(p).
    pub fn prime_field(&self) -> &Rc<PrimeField> {
        &self.prime_field
    }

    /// Number of elements, `p^m`.
    pub fn order(&self) -> u64 {
        // Checked on construction
        self.p.pow(self.m as u32)
    }

    /// Order of the multiplicative group, `p^m - 1`.
    pub fn multiplicative_group_order(&self) -> u64 {
        self.order() - 1
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Set the defining polynomial. Can be called once.
    ///
    /// # Errors
    ///
    /// - `ModulusAlreadySet` on a second call.
    /// - `FieldMismatch` if `poly` is over another prime field instance.
    /// - `WrongDegree` unless `poly` has degree exactly `m`.
    pub fn set_irreducible(&mut self, poly: Element) -> FieldResult<()> {
        if self.irreducible.is_some() {
            return Err(FieldError::ModulusAlreadySet);
        }
        if !Rc::ptr_eq(poly.field(), &self.prime_field) {
            return Err(FieldError::FieldMismatch);
        }
        if poly.degree() != Some(self.m) {
            return Err(FieldError::WrongDegree {
                expected: self.m,
                got: poly.degree(),
            });
        }

        debug!(p = self.p, m = self.m, modulus = %poly, "irreducible polynomial set");
        self.irreducible = Some(poly);
        self.state = SearchState::Ready;
        Ok(())
    }

    /// The defining polynomial, as set.
    pub fn irreducible(&self) -> Option<&Element> {
        self.irreducible.as_ref()
    }

    /// The result of the last successful search.
    pub fn primitive_element(&self) -> Option<&Element> {
        self.primitive.as_ref()
    }

    /// A polynomial over GF(p) from ascending coefficient digits, not reduced.
    ///
    /// # Errors
    ///
    /// Returns `CoefficientOutOfRange` for a digit `>= p`.
    pub fn polynomial(&self, coeffs: &[u64]) -> FieldResult<Element> {
        if let Some((position, &value)) = coeffs.iter().enumerate().find(|(_, &c)| c >= self.p) {
            return Err(FieldError::CoefficientOutOfRange {
                position,
                value,
                prime: self.p,
            });
        }
        Ok(Polynomial::from_values(&self.prime_field, coeffs))
    }

    /// The field element with the given coefficients, reduced mod `f(x)`.
    pub fn element(&self, coeffs: &[u64]) -> FieldResult<Element> {
        self.reduce(&self.polynomial(coeffs)?)
    }

    /// Enumerate all `p^m` elements as coefficient vectors of length `m`.
    pub fn elements(&self) -> ElementGenerator {
        ElementGenerator::new(&self.prime_field, self.m)
    }

    /// `g mod f(x)`.
    pub fn reduce(&self, g: &Element) -> FieldResult<Element> {
        g.rem(self.modulus()?)
    }

    /// `a + b` in GF(p^m).
    pub fn add(&self, a: &Element, b: &Element) -> FieldResult<Element> {
        self.reduce(&a.try_add(b)?)
    }

    /// `a * b mod f(x)`.
    pub fn mul(&self, a: &Element, b: &Element) -> FieldResult<Element> {
        self.reduce(&a.try_mul(b)?)
    }

    /// `g^exp mod f(x)`.
    pub fn pow(&self, g: &Element, exp: u64) -> FieldResult<Element> {
        g.pow_mod(exp, self.modulus()?)
    }

    /// Multiplicative order of `g`: the smallest divisor `d` of `p^m - 1`
    /// with `g^d = 1`.
    ///
    /// Returns `None` when no such divisor exists, which only happens for a
    /// zero divisor under a reducible modulus.
    ///
    /// # Errors
    ///
    /// `ZeroInverse` if `g` reduces to zero.
    pub fn element_order(&self, g: &Element) -> FieldResult<Option<u64>> {
        let modulus = self.modulus()?;
        if g.rem(modulus)?.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let one = self.prime_field.one();
        for d in divisors(self.multiplicative_group_order()) {
            if g.pow_mod(d, modulus)?.is_coeff(&one) {
                return Ok(Some(d));
            }
        }
        Ok(None)
    }

    /// `true` if `g` generates the multiplicative group.
    pub fn is_primitive(&self, g: &Element) -> FieldResult<bool> {
        let group_order = self.multiplicative_group_order();
        self.test_candidate(g, self.modulus()?, &divisors(group_order), None)
    }

    /// Search the field for a primitive element.
    ///
    /// Candidates are taken from [`elements`](Self::elements) in order; the
    /// first one whose multiplicative order is `p^m - 1` is stored and
    /// returned. Tracing events are emitted for every candidate and tested
    /// power; `options.verbose` additionally records them in the report.
    ///
    /// # Errors
    ///
    /// - `ModulusNotSet` if no irreducible polynomial was set.
    /// - `NoPrimitiveElement` if every candidate fails, which means the
    ///   modulus was not irreducible.
    pub fn find_primitive_element(&mut self, options: SearchOptions) -> FieldResult<SearchReport> {
        let modulus = self.modulus()?.clone();
        let group_order = self.multiplicative_group_order();
        let divisors = divisors(group_order);

        debug!(
            p = self.p,
            m = self.m,
            group_order,
            divisors = divisors.len(),
            all_degrees = options.all_degrees,
            "starting primitive element search"
        );
        self.state = SearchState::Searching;

        let mut trace = Vec::new();
        let mut candidates_tested = 0;
        for candidate in self.elements() {
            candidates_tested += 1;
            debug!(candidate = %candidate, "testing candidate");

            let steps = options.verbose.then_some(&mut trace);
            if self.test_candidate(&candidate, &modulus, &divisors, steps)? {
                info!(primitive = %candidate, candidates_tested, "found primitive element");
                self.primitive = Some(candidate.clone());
                self.state = SearchState::Found;
                return Ok(SearchReport {
                    primitive: candidate,
                    candidates_tested,
                    trace,
                });
            }
        }

        warn!(
            candidates_tested,
            modulus = %modulus,
            "no primitive element found; modulus is not irreducible"
        );
        self.state = SearchState::Ready;
        Err(FieldError::NoPrimitiveElement {
            candidates: candidates_tested,
        })
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Element {
        let digits: Vec<u64> = (0..self.m).map(|_| rng.gen_range(0..self.p)).collect();
        Polynomial::from_values(&self.prime_field, &digits)
    }

    fn modulus(&self) -> FieldResult<&Element> {
        self.irreducible.as_ref().ok_or(FieldError::ModulusNotSet)
    }

    /// Walk the divisors of `N = p^m - 1` in increasing order and stop at the
    /// first `d` with `g^d = 1`. `g` is primitive iff that first `d` is `N`.
    fn test_candidate(
        &self,
        g: &Element,
        modulus: &Element,
        divisors: &[u64],
        mut steps: Option<&mut Vec<PowerStep>>,
    ) -> FieldResult<bool> {
        let group_order = self.multiplicative_group_order();
        let one = self.prime_field.one();

        for &d in divisors {
            let residue = g.pow_mod(d, modulus)?;
            trace!(exponent = d, residue = %residue, "g^d mod f(x)");
            let hit = residue.is_coeff(&one);
            if let Some(steps) = steps.as_deref_mut() {
                steps.push(PowerStep {
                    candidate: g.clone(),
                    exponent: d,
                    residue,
                });
            }
            if hit {
                return Ok(d == group_order);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf8() -> FiniteField {
        FiniteField::with_modulus(2, 3, &[1, 0, 1, 1]).unwrap()
    }

    #[test]
    fn construction_errors() {
        assert_eq!(FiniteField::new(4, 2).unwrap_err(), FieldError::NotPrime(4));
        assert_eq!(FiniteField::new(3, 0).unwrap_err(), FieldError::ZeroDegree);
        assert_eq!(
            FiniteField::new(2, 64).unwrap_err(),
            FieldError::OrderOverflow { p: 2, m: 64 }
        );
    }

    #[test]
    fn orders() {
        let field = FiniteField::new(3, 4).unwrap();
        assert_eq!(field.characteristic(), 3);
        assert_eq!(field.degree(), 4);
        assert_eq!(field.order(), 81);
        assert_eq!(field.multiplicative_group_order(), 80);
        assert_eq!(field.state(), SearchState::Uninitialized);
    }

    #[test]
    fn set_irreducible_once() {
        let mut field = FiniteField::new(2, 3).unwrap();
        let f = field.polynomial(&[1, 1, 0, 1]).unwrap();
        field.set_irreducible(f.clone()).unwrap();
        assert_eq!(field.state(), SearchState::Ready);
        assert_eq!(field.irreducible(), Some(&f));
        assert_eq!(
            field.set_irreducible(f).unwrap_err(),
            FieldError::ModulusAlreadySet
        );
    }

    #[test]
    fn set_irreducible_checks_degree() {
        let mut field = FiniteField::new(2, 3).unwrap();
        let f = field.polynomial(&[1, 1, 1, 0]).unwrap();
        assert_eq!(
            field.set_irreducible(f).unwrap_err(),
            FieldError::WrongDegree {
                expected: 3,
                got: Some(2)
            }
        );
        assert_eq!(field.state(), SearchState::Uninitialized);
    }

    #[test]
    fn set_irreducible_checks_field() {
        let mut field = FiniteField::new(2, 1).unwrap();
        let other = PrimeField::new(2).unwrap();
        let f = Polynomial::from_values(&other, &[1, 1]);
        assert_eq!(
            field.set_irreducible(f).unwrap_err(),
            FieldError::FieldMismatch
        );
    }

    #[test]
    fn coefficient_out_of_range() {
        assert_eq!(
            FiniteField::with_modulus(3, 2, &[1, 3, 1]).unwrap_err(),
            FieldError::CoefficientOutOfRange {
                position: 1,
                value: 3,
                prime: 3
            }
        );
    }

    #[test]
    fn operations_need_modulus() {
        let mut field = FiniteField::new(2, 3).unwrap();
        let g = field.polynomial(&[0, 1]).unwrap();
        assert_eq!(field.reduce(&g).unwrap_err(), FieldError::ModulusNotSet);
        assert_eq!(
            field.find_primitive_element(SearchOptions::default()).unwrap_err(),
            FieldError::ModulusNotSet
        );
        assert_eq!(field.state(), SearchState::Uninitialized);
    }

    #[test]
    fn arithmetic_mod_f() {
        let field = gf8();
        let x = field.element(&[0, 1]).unwrap();
        let x2 = field.element(&[0, 0, 1]).unwrap();
        // x^3 = 1 + x^2 in GF(2)[x] / (1 + x^2 + x^3)
        let x3 = field.mul(&x, &x2).unwrap();
        assert_eq!(x3.to_values(), vec![1, 0, 1]);
        assert_eq!(field.pow(&x, 3).unwrap(), x3);
        assert_eq!(field.element(&[0, 0, 0, 1]).unwrap(), x3);
        // characteristic 2: a + a = 0
        assert!(field.add(&x3, &x3).unwrap().is_zero());
    }

    #[test]
    fn gf8_element_orders() {
        let field = gf8();
        for g in field.elements().skip(1) {
            let expected = if g.is_coeff(&field.prime_field().one()) { 1 } else { 7 };
            assert_eq!(field.element_order(&g).unwrap(), Some(expected), "g = {}", g);
        }
        let zero = field.element(&[0]).unwrap();
        assert_eq!(field.element_order(&zero).unwrap_err(), FieldError::ZeroInverse);

        // x + 1 divides x^2 + 1 over GF(2)
        let ring = FiniteField::with_modulus(2, 2, &[1, 0, 1]).unwrap();
        let zero_divisor = ring.element(&[1, 1]).unwrap();
        assert_eq!(ring.element_order(&zero_divisor).unwrap(), None);
    }

    #[test]
    fn gf8_primitive_is_x() {
        let mut field = gf8();
        let report = field.find_primitive_element(SearchOptions::default()).unwrap();
        assert_eq!(report.primitive.to_values(), vec![0, 1]);
        assert_eq!(report.candidates_tested, 3);
        assert!(report.trace.is_empty());
        assert_eq!(field.state(), SearchState::Found);
        assert_eq!(field.primitive_element(), Some(&report.primitive));
    }

    #[test]
    fn gf3_primitive_is_two() {
        let mut field = FiniteField::with_modulus(3, 1, &[1, 1]).unwrap();
        let report = field.find_primitive_element(SearchOptions::default()).unwrap();
        assert_eq!(report.primitive.to_values(), vec![2]);
    }

    #[test]
    fn gf2_primitive_is_one() {
        // The multiplicative group of GF(2) is trivial
        let mut field = FiniteField::with_modulus(2, 1, &[0, 1]).unwrap();
        let report = field.find_primitive_element(SearchOptions::default()).unwrap();
        assert_eq!(report.primitive.to_values(), vec![1]);
    }

    #[test]
    fn gf9_skips_non_primitive_x() {
        // x^2 + 1 is irreducible over GF(3) but x has order 4
        let mut field = FiniteField::with_modulus(3, 2, &[1, 0, 1]).unwrap();
        let x = field.element(&[0, 1]).unwrap();
        assert_eq!(field.element_order(&x).unwrap(), Some(4));
        assert!(!field.is_primitive(&x).unwrap());

        let report = field.find_primitive_element(SearchOptions::default()).unwrap();
        assert_eq!(report.primitive.to_values(), vec![1, 1]);
        assert_eq!(report.candidates_tested, 5);
        assert_eq!(field.element_order(&report.primitive).unwrap(), Some(8));
    }

    #[test]
    fn verbose_records_every_power() {
        let mut field = gf8();
        let options = SearchOptions {
            verbose: true,
            all_degrees: false,
        };
        let report = field.find_primitive_element(options).unwrap();

        // 0: d = 1, 7; 1: d = 1 (hit); x: d = 1, 7 (hit)
        let exponents: Vec<u64> = report.trace.iter().map(|s| s.exponent).collect();
        assert_eq!(exponents, vec![1, 7, 1, 1, 7]);
        let last = report.trace.last().unwrap();
        assert_eq!(last.candidate, report.primitive);
        assert!(last.residue.is_coeff(&field.prime_field().one()));
    }

    #[test]
    fn options_do_not_change_result() {
        let mut field = FiniteField::with_modulus(5, 2, &[2, 1, 1]).unwrap();
        let plain = field.find_primitive_element(SearchOptions::default()).unwrap();
        let all = field
            .find_primitive_element(SearchOptions {
                verbose: true,
                all_degrees: true,
            })
            .unwrap();
        assert_eq!(plain.primitive, all.primitive);
        assert_eq!(plain.candidates_tested, all.candidates_tested);
    }

    #[test]
    fn reducible_modulus_exhausts_search() {
        // x^2 + 1 = (x + 1)^2 over GF(2)
        let mut field = FiniteField::with_modulus(2, 2, &[1, 0, 1]).unwrap();
        assert_eq!(
            field.find_primitive_element(SearchOptions::default()).unwrap_err(),
            FieldError::NoPrimitiveElement { candidates: 4 }
        );
        assert_eq!(field.state(), SearchState::Ready);
        assert!(field.primitive_element().is_none());
    }

    #[test]
    fn zero_is_never_primitive() {
        let field = gf8();
        let zero = field.element(&[0, 0, 0]).unwrap();
        assert!(!field.is_primitive(&zero).unwrap());
    }
}
