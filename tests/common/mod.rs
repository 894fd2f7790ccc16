#![allow(dead_code)]

use nalgebra::{Point3, Vector3, Vector4};

pub const EPSILON: f64 = 1e-9;

#[track_caller]
pub fn assert_point_near(actual: &Point3<f64>, expected: &Point3<f64>) {
    assert!(
        (actual - expected).norm() < EPSILON,
        "expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub fn assert_vector_near(actual: &Vector3<f64>, expected: &Vector3<f64>) {
    assert!(
        (actual - expected).norm() < EPSILON,
        "expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub fn assert_tangent_near(actual: &Vector4<f64>, expected: &Vector4<f64>) {
    assert!(
        (actual - expected).norm() < EPSILON,
        "expected {expected:?}, got {actual:?}"
    );
}

/// The four-vertex strip used throughout: `(1,0,0) .. (4,0,0)`.
pub fn strip() -> flexure::VertexBuffer<f64> {
    flexure::VertexBuffer::from_positions(
        (1..=4)
            .map(|x| nalgebra::point![f64::from(x), 0.0, 0.0])
            .collect(),
    )
}

pub mod arbitrary;
