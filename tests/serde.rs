#![cfg(feature = "serde")]

use anyhow::Result;
use linalg_kit::{AugmentedMatrix, Matrix, Number, SquareMatrix, Vector};

#[test]
fn number_is_untagged() -> Result<()> {
    assert_eq!(serde_json::to_string(&Number::Int(3))?, "3");
    assert_eq!(serde_json::to_string(&Number::Real(0.5))?, "0.5");
    assert!(matches!(serde_json::from_str::<Number>("-7")?, Number::Int(-7)));
    assert!(matches!(serde_json::from_str::<Number>("2.5")?, Number::Real(r) if r == 2.5));
    Ok(())
}

#[test]
fn vector_is_a_sequence() -> Result<()> {
    let v = Vector::from_slice(&[1.0, 2.5, -3.0]);
    let json = serde_json::to_string(&v)?;
    assert_eq!(json, "[1.0,2.5,-3.0]");
    assert_eq!(serde_json::from_str::<Vector>(&json)?, v);
    Ok(())
}

#[test]
fn matrix_is_nested_rows() -> Result<()> {
    let m: Matrix = "1, 2; 3, 4.5".parse()?;
    let json = serde_json::to_string(&m)?;
    assert_eq!(json, "[[1,2],[3,4.5]]");
    assert_eq!(serde_json::from_str::<Matrix>(&json)?, m);
    Ok(())
}

#[test]
fn deserialization_revalidates_shape() {
    assert!(serde_json::from_str::<Matrix>("[[1, 2], [3]]").is_err());
    assert!(serde_json::from_str::<Matrix>("[]").is_err());
    assert!(serde_json::from_str::<SquareMatrix>("[[1, 2, 3]]").is_err());
    assert!(serde_json::from_str::<AugmentedMatrix>("[[1, 2], [3, 4]]").is_err());
    assert!(serde_json::from_str::<AugmentedMatrix>("[[1, 2, 3], [4, 5, 6]]").is_ok());
}

#[test]
fn square_matrix_round_trip() -> Result<()> {
    let s = SquareMatrix::identity(2);
    let json = serde_json::to_string(&s)?;
    assert_eq!(json, "[[1,0],[0,1]]");
    assert_eq!(serde_json::from_str::<SquareMatrix>(&json)?, s);
    Ok(())
}
