//! The four per-vertex transformations a [Segment] is made of.
//!
//! Each kernel works on a [VertexSliceMut], so it can be pointed at a whole buffer or at a single
//! segment's vertices.

use flexure_common::ArrayIndex;
use nalgebra::{Point3, UnitQuaternion, Vector3, Vector4};

use crate::{Float, Segment, VertexSliceMut};

/// A radial bend, which curls vertices toward a fixed "gravity" orientation in proportion to
/// their distance from the origin.
///
/// The gravity rotation faces along `-Y` with `+Z` as its up reference (a quarter turn about
/// `+X`). A negative bending flips both reference axes, curling the other way.
///
/// # Interpolation
///
/// Each vertex `v` is rotated by `slerp(identity, gravity, t)` with `t = |bending| · |v|`, where
/// `t` is clamped to `0..=1`. Vertices farther than `1 / |bending|` from the origin receive the
/// full gravity rotation; the bend never overshoots it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bend<Real: Float> {
    gravity: UnitQuaternion<Real>,
    magnitude: Real,
}

impl<Real: Float> Bend<Real> {
    pub fn new(bending: Real) -> Self {
        let mut up = Vector3::y();
        let mut forward = Vector3::z();
        let mut magnitude = bending;
        if bending < Real::ZERO {
            up = -up;
            forward = -forward;
            magnitude = -bending;
        }
        Self {
            gravity: UnitQuaternion::face_towards(&-up, &forward),
            magnitude,
        }
    }

    /// The orientation a vertex is bent toward at full strength.
    #[inline]
    pub fn gravity(&self) -> &UnitQuaternion<Real> {
        &self.gravity
    }

    /// `|bending|`
    #[inline]
    pub fn magnitude(&self) -> Real {
        self.magnitude
    }

    /// Whether this bend leaves every vertex unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.magnitude == Real::ZERO
    }

    /// The interpolation factor used for a vertex at `position`.
    #[inline]
    pub fn strength_at(&self, position: &Point3<Real>) -> Real {
        num_traits::clamp(
            self.magnitude * position.coords.norm(),
            Real::ZERO,
            Real::ONE,
        )
    }

    /// The rotation applied to a vertex at `position`.
    #[inline]
    pub fn rotation_at(&self, position: &Point3<Real>) -> UnitQuaternion<Real> {
        UnitQuaternion::identity().slerp(&self.gravity, self.strength_at(position))
    }

    /// Bend a single vertex.
    #[inline]
    pub fn apply(
        &self,
        position: &mut Point3<Real>,
        normal: &mut Vector3<Real>,
        tangent: &mut Vector4<Real>,
    ) {
        let rot = self.rotation_at(position);
        *position = rot * *position;
        *normal = rot * *normal;
        rotate_tangent(&rot, tangent);
    }
}

/// Rotate the direction of a tangent, leaving its handedness (`w`) alone.
#[inline]
pub(crate) fn rotate_tangent<Real: Float>(
    rotation: &UnitQuaternion<Real>,
    tangent: &mut Vector4<Real>,
) {
    let dir = rotation * tangent.xyz();
    tangent.x = dir.x;
    tangent.y = dir.y;
    tangent.z = dir.z;
}

/// Bend every vertex in `vertices`. See [Bend].
pub fn bend<Real: Float>(vertices: &mut VertexSliceMut<'_, Real>, bending: Real) {
    let bend = Bend::new(bending);
    if bend.is_identity() {
        return;
    }
    for (p, n, t) in vertices.iter_mut() {
        bend.apply(p, n, t);
    }
}

/// Multiply every position in `vertices` by `factor`. Normals and tangents are unchanged.
pub fn scale<Real: Float>(vertices: &mut VertexSliceMut<'_, Real>, factor: Real) {
    for p in vertices.positions_mut() {
        p.coords *= factor;
    }
}

/// Rotate every position, normal, and tangent direction in `vertices` about the origin.
pub fn rotate<Real: Float>(vertices: &mut VertexSliceMut<'_, Real>, rotation: &UnitQuaternion<Real>) {
    for (p, n, t) in vertices.iter_mut() {
        *p = rotation * *p;
        *n = rotation * *n;
        rotate_tangent(rotation, t);
    }
}

/// Move every position in `vertices` by `offset`.
pub fn translate<Real: Float>(vertices: &mut VertexSliceMut<'_, Real>, offset: &Vector3<Real>) {
    for p in vertices.positions_mut() {
        *p += offset;
    }
}

/// Scale, rotate, then translate `vertices` as described by `segment`.
///
/// `vertices` should be the segment's own range; bending is not applied.
pub fn place<Real: Float, Idx: ArrayIndex>(
    vertices: &mut VertexSliceMut<'_, Real>,
    segment: &Segment<Real, Idx>,
) {
    scale(vertices, segment.scale);
    rotate(vertices, &segment.rotation);
    translate(vertices, &segment.offset);
}
