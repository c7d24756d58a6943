//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use galoisgen::{FieldConfig, Polynomial, PrimeField, SearchOptions};

#[test]
fn element_serializes_as_value() {
    let f17 = PrimeField::new(17).unwrap();
    let json = serde_json::to_string(&f17.element(24)).unwrap();
    assert_eq!(json, "7");
}

#[test]
fn polynomial_serializes_dense_coefficients() {
    let f17 = PrimeField::new(17).unwrap();
    // 3 + x^2, stored with a trailing zero term
    let p = Polynomial::from_values(&f17, &[3, 0, 1, 0]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[3,0,1]");
}

#[test]
fn zero_polynomial_serializes_empty() {
    let f17 = PrimeField::new(17).unwrap();
    let json = serde_json::to_string(&Polynomial::zero(&f17)).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn config_roundtrip() {
    let config = FieldConfig::new(2, 3, vec![1, 0, 1, 1]).verbose(true);
    let json = serde_json::to_string(&config).unwrap();

    // Check that the modulus is included
    assert!(json.contains("\"modulus\":[1,0,1,1]"));

    let back: FieldConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_flags_default_to_false() {
    let json = r#"{"prime":3,"degree":2,"modulus":[1,0,1]}"#;
    let config: FieldConfig = serde_json::from_str(json).unwrap();
    assert!(!config.verbose);
    assert!(!config.all_degrees);
}

#[test]
fn config_rebuilds_field() {
    let json = r#"{"prime":3,"degree":2,"modulus":[1,0,1],"verbose":false,"all_degrees":true}"#;
    let config: FieldConfig = serde_json::from_str(json).unwrap();
    let mut field = config.build().unwrap();

    let report = field.find_primitive_element(config.search_options()).unwrap();
    assert_eq!(serde_json::to_string(&report.primitive).unwrap(), "[1,1]");
}

#[test]
fn invalid_config_fails_on_build() {
    // Leading coefficient out of range for GF(3)
    let json = r#"{"prime":3,"degree":2,"modulus":[1,0,5]}"#;
    let config: FieldConfig = serde_json::from_str(json).unwrap();
    assert!(config.build().is_err());
}

#[test]
fn search_options_roundtrip() {
    let options = SearchOptions {
        verbose: true,
        all_degrees: false,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"verbose":true,"all_degrees":false}"#);
    let back: SearchOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
