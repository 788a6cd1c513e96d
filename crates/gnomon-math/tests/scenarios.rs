//! Worked examples against hand-computed values.

use gnomon_math::{Mat2, Mat3, MathError, MatrixKind, Vec2, Vec3};

const EPS: f64 = 1e-9;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= EPS, "index {i}: {actual:?} vs {expected:?}");
    }
}

// ─── Mat2 ────────────────────────────────────────────────────────────────────

#[test]
fn mat2_from_list_determinant_inverse() {
    let m = Mat2::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!((m.ux, m.vx, m.uy, m.vy), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(m.determinant(), -2.0);

    let inv = m.inverse().unwrap();
    assert_eq!(inv.to_array(), [-2.0, 1.0, 1.5, -0.5]);
    assert_close(&(m * inv).to_array(), &Mat2::IDENTITY.to_array());
}

#[test]
fn mat2_rotation_round_trip() {
    let (s, c) = 0.7f64.sin_cos();
    let rot = Mat2::from_cols(Vec2::new(c, s), Vec2::new(-s, c));
    assert!((rot.determinant() - 1.0).abs() <= EPS);
    assert_close(&rot.inverse().unwrap().to_array(), &rot.transpose().to_array());

    let v = Vec2::new(2.0, -1.0);
    let back = rot.inverse().unwrap() * (rot * v);
    assert_close(&back.to_array(), &v.to_array());
}

// ─── Mat3 ────────────────────────────────────────────────────────────────────

#[test]
fn mat3_identity_is_neutral() {
    let m = Mat3::from_slice(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0]).unwrap();
    assert_eq!(Mat3::IDENTITY * m, m);
    assert_eq!(m * Mat3::IDENTITY, m);
    assert_eq!(Mat3::IDENTITY.inverse(), Ok(Mat3::IDENTITY));
}

#[test]
fn mat3_inverse_of_scaled_identity() {
    let m = Mat3::IDENTITY * 4.0;
    assert_eq!(m.determinant(), 64.0);
    assert_eq!(m.inverse().unwrap(), Mat3::IDENTITY * 0.25);
}

#[test]
fn singular_matrices_are_rejected_with_kind() {
    let dup_rows = Mat3::from_rows(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let err = dup_rows.inverse().unwrap_err();
    assert_eq!(err, MathError::NotInvertible { kind: MatrixKind::Mat3 });
    assert_eq!(err.to_string(), "mat3 is singular (not invertible)");
}

#[test]
fn short_flat_list_message() {
    let err = Mat3::from_slice(&[0.0; 4]).unwrap_err();
    assert_eq!(err.to_string(), "mat3 needs 9 coefficients, got 4");
}

// ─── Basis ───────────────────────────────────────────────────────────────────

#[test]
fn tnb_pole_keeps_normal_exactly() {
    let n = Vec3::new(0.0, 1.0, 0.0);
    let m = Mat3::build_tnb(n);
    assert_eq!(m.col2(), n);
    assert_eq!(m.col1(), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn tnb_maps_local_frame_to_world() {
    let n = Vec3::new(1.0, 1.0, 0.0).normalize();
    let m = Mat3::build_tnb(n);
    // local "up" (the normal slot) lands on n
    assert_close(&(m * Vec3::UNIT_Y).to_array(), &n.to_array());
    // and the basis is a rotation, so lengths survive
    let d = Vec3::new(0.3, -2.0, 1.1);
    assert!(((m * d).length() - d.length()).abs() <= EPS);
}

#[test]
fn cross_unit_axes() {
    assert_eq!(Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
}

// ─── Serde ───────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[test]
fn serde_uses_coefficient_names() {
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json, serde_json::json!({ "ux": 1.0, "vx": 2.0, "uy": 3.0, "vy": 4.0 }));

    let v: Vec3 = serde_json::from_str(r#"{ "x": 1.0, "y": -2.0, "z": 0.5 }"#).unwrap();
    assert_eq!(v, Vec3::new(1.0, -2.0, 0.5));
}
