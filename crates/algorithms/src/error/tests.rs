use super::*;

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "curve_order", "should pass").is_ok());
    let err = validate::parameter(false, "curve_order", "not prime").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "curve_order");
            assert_eq!(reason, "not prime");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("Fq12 coefficients", 12, 12).is_ok());
    let err = validate::length("Fq12 coefficients", 11, 12).unwrap_err();

    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "Fq12 coefficients");
            assert_eq!(expected, 12);
            assert_eq!(actual, 11);
        }
        _ => panic!("Expected Length error"),
    }

    assert!(validate::max_length("field element bytes", 48, 48).is_ok());
    assert!(validate::max_length("field element bytes", 49, 48).is_err());
}

#[test]
fn test_error_display() {
    let err = Error::param("g1", "generator is not on the curve");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'g1': generator is not on the curve"
    );

    let err = Error::Length {
        context: "Fq2 coefficients",
        expected: 2,
        actual: 3,
    };
    assert_eq!(
        err.to_string(),
        "Invalid length for Fq2 coefficients: expected 2, got 3"
    );
}
