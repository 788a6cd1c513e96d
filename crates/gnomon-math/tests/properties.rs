//! Algebraic properties checked over generated inputs.
//!
//! Seeds are pinned so a failure reproduces on any machine.

use gnomon_math::{Mat2, Mat3, Vec2, Vec3};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

// ─── Helpers ─────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

const SEED_BYTES: [u8; 32] = [
    0x67, 0x6e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

// Bounded so products of three matrices stay well inside the tolerance.
fn scalar() -> impl Strategy<Value = f64> { -10.0f64..10.0 }

fn vec2() -> impl Strategy<Value = Vec2> {
    prop::array::uniform2(scalar()).prop_map(Vec2::from)
}

fn vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(scalar()).prop_map(Vec3::from)
}

fn mat2() -> impl Strategy<Value = Mat2> {
    prop::array::uniform4(scalar()).prop_map(Mat2::from)
}

fn mat3() -> impl Strategy<Value = Mat3> {
    prop::array::uniform9(scalar()).prop_map(Mat3::from)
}

fn close2(a: Mat2, b: Mat2) -> bool {
    a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() <= EPS)
}

fn close3(a: Mat3, b: Mat3) -> bool {
    a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() <= EPS)
}

// ─── Vectors ─────────────────────────────────────────────────────────────────

#[test]
fn dot_is_commutative() {
    runner()
        .run(&(vec2(), vec2(), vec3(), vec3()), |(a2, b2, a3, b3)| {
            prop_assert_eq!(a2.dot(b2), b2.dot(a2));
            prop_assert_eq!(a3.dot(b3), b3.dot(a3));
            Ok(())
        })
        .expect("dot commutes");
}

#[test]
fn cross_is_anti_commutative_and_orthogonal() {
    runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            let c = a.cross(b);
            prop_assert_eq!(c, -b.cross(a));
            prop_assert!(c.dot(a).abs() <= EPS, "{c:?} · {a:?}");
            prop_assert!(c.dot(b).abs() <= EPS, "{c:?} · {b:?}");
            Ok(())
        })
        .expect("cross properties");
}

#[test]
fn length_is_non_negative() {
    runner()
        .run(&vec3(), |v| {
            prop_assert!(v.length() >= 0.0);
            Ok(())
        })
        .expect("length sign");
}

// ─── Matrices ────────────────────────────────────────────────────────────────

#[test]
fn transpose_is_an_involution() {
    runner()
        .run(&(mat2(), mat3()), |(m2, m3)| {
            prop_assert_eq!(m2.transpose().transpose(), m2);
            prop_assert_eq!(m3.transpose().transpose(), m3);
            Ok(())
        })
        .expect("transpose involution");
}

#[test]
fn adjugate_is_transposed_cofactor() {
    runner()
        .run(&(mat2(), mat3()), |(m2, m3)| {
            prop_assert_eq!(m2.adjugate(), m2.cofactor().transpose());
            prop_assert_eq!(m3.adjugate(), m3.cofactor().transpose());
            Ok(())
        })
        .expect("adjugate definition");
}

#[test]
fn mat2_times_inverse_is_identity() {
    let invertible = mat2().prop_filter("well conditioned", |m| m.determinant().abs() > 0.5);
    runner()
        .run(&invertible, |m| {
            let inv = m.inverse().expect("non-zero determinant");
            prop_assert!(close2(m * inv, Mat2::IDENTITY), "{m:?}");
            Ok(())
        })
        .expect("mat2 inverse");
}

#[test]
fn mat3_times_inverse_is_identity() {
    let invertible = mat3().prop_filter("well conditioned", |m| m.determinant().abs() > 0.5);
    runner()
        .run(&invertible, |m| {
            let inv = m.inverse().expect("non-zero determinant");
            prop_assert!(close3(m * inv, Mat3::IDENTITY), "{m:?}");
            Ok(())
        })
        .expect("mat3 inverse");
}

#[test]
fn mul_is_associative() {
    runner()
        .run(&(mat2(), mat2(), mat2()), |(m, n, p)| {
            prop_assert!(close2((m * n) * p, m * (n * p)));
            Ok(())
        })
        .expect("mat2 associativity");
    runner()
        .run(&(mat3(), mat3(), mat3()), |(m, n, p)| {
            prop_assert!(close3((m * n) * p, m * (n * p)));
            Ok(())
        })
        .expect("mat3 associativity");
}

#[test]
fn mul_vec_matches_mul_by_column_matrix() {
    runner()
        .run(&(mat3(), vec3()), |(m, v)| {
            let as_matrix = m * Mat3::from_cols(v, Vec3::ZERO, Vec3::ZERO);
            prop_assert_eq!(m * v, as_matrix.col1());
            Ok(())
        })
        .expect("matrix-vector product");
}

#[test]
fn tnb_is_orthonormal_away_from_the_pole() {
    let normals = vec3()
        .prop_filter("off the vertical axis", |v| v.x.hypot(v.z) > 1e-3)
        .prop_map(Vec3::normalize);
    runner()
        .run(&normals, |n| {
            let m = Mat3::build_tnb(n);
            prop_assert_eq!(m.col2(), n);
            prop_assert!(close3(m.transpose() * m, Mat3::IDENTITY), "{m:?}");
            Ok(())
        })
        .expect("tnb basis");
}
