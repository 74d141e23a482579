use super::*;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_basic() -> Result<(), ScalarGradError> {
    assert_eq!(ln_op(&Node::new(1.0))?.value(), 0.0);
    assert_relative_eq!(ln_op(&Node::new(std::f64::consts::E))?.value(), 1.0);
    assert_eq!(Node::new(2.0).log()?.label(), "log");
    Ok(())
}

#[test]
fn test_ln_backward() -> Result<(), ScalarGradError> {
    let x = Node::new(4.0);
    let y = x.log()?;
    y.backward();
    assert_relative_eq!(x.grad(), 0.25);
    Ok(())
}

#[test]
fn test_ln_non_positive_is_domain_error() {
    let negative = Node::new(-1.0);
    for _ in 0..3 {
        match negative.log() {
            Err(ScalarGradError::DomainError { operation, value }) => {
                assert_eq!(operation, "ln_op");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected DomainError, got {:?}", other),
        }
    }
    assert!(matches!(
        ln_op(&Node::new(0.0)),
        Err(ScalarGradError::DomainError { .. })
    ));
}

#[test]
fn test_ln_nan_is_domain_error() {
    assert!(ln_op(&Node::new(f64::NAN)).is_err());
}

#[test]
fn test_ln_promotes_plain_numbers() -> Result<(), ScalarGradError> {
    assert_relative_eq!(ln_op(0.5)?.value(), 0.5_f64.ln());
    assert_eq!(
        ln_op(-1.0).unwrap_err(),
        ScalarGradError::DomainError {
            operation: "ln_op".to_string(),
            value: -1.0
        }
    );
    assert_eq!(crate::ops::math_elem::exp_op(0.0).value(), 1.0);
    Ok(())
}
