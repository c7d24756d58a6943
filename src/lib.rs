//! Finite fields GF(p) and GF(p^m) with polynomial arithmetic over a
//! runtime prime, and a search for primitive elements of GF(p^m).
//!
//! ```
//! use galoisgen::{FiniteField, SearchOptions};
//!
//! let mut gf8 = FiniteField::with_modulus(2, 3, &[1, 0, 1, 1]).unwrap();
//! let report = gf8.find_primitive_element(SearchOptions::default()).unwrap();
//! assert_eq!(report.primitive.to_string(), "x");
//! ```

pub mod algebra;
pub mod config;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::{CoefficientField, FieldElement};

pub use config::{parse_coefficients, FieldConfig};
pub use error::{ConfigError, FieldError, FieldResult};
pub use structures::fp::{PrimeField, PrimeFieldElement};
pub use structures::generator::ElementGenerator;
pub use structures::gf;
pub use structures::gf::{FiniteField, PowerStep, SearchOptions, SearchReport, SearchState};
pub use structures::poly::{Monomial, Polynomial, VectorForm};
pub use utils::{divisors, field_order, is_prime};
