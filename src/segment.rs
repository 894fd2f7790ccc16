use std::ops::Range;

use flexure_common::ArrayIndex;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{Error, Float};

/// One run of vertices within a mesh, along with the transformation to apply to it.
///
/// Transformations are applied in a fixed order: bend, then scale, rotation, and translation.
/// Rotation and translation do not commute, so a segment placed at `offset` is rotated about the
/// mesh origin *before* being moved there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<Real: Float, Idx: ArrayIndex = u32> {
    /// Index of the first vertex in the segment.
    pub start: Idx,
    /// Number of vertices in the segment.
    pub length: Idx,
    pub offset: Vector3<Real>,
    /// Uniform scale applied to positions only.
    pub scale: Real,
    pub rotation: UnitQuaternion<Real>,
    /// Signed bend magnitude; see [Bend](crate::kernel::Bend).
    pub bending: Real,
}

impl<Real: Float, Idx: ArrayIndex> Segment<Real, Idx> {
    /// A segment over `start..start + length` which leaves its vertices where they are.
    pub fn new(start: Idx, length: Idx) -> Self {
        Self {
            start,
            length,
            offset: Vector3::zeros(),
            scale: Real::ONE,
            rotation: UnitQuaternion::identity(),
            bending: Real::ZERO,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vector3<Real>) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Real) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: UnitQuaternion<Real>) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_bending(mut self, bending: Real) -> Self {
        self.bending = bending;
        self
    }

    /// The vertex indices covered by this segment, or `None` if the end isn't representable.
    #[inline]
    pub fn range(&self) -> Option<Range<usize>> {
        Idx::span(self.start, self.length)
    }

    /// Whether scale, rotation, and translation would leave this segment's vertices unchanged.
    ///
    /// Bending is not considered, since it may reach vertices outside of the segment.
    pub fn is_rigid_identity(&self) -> bool {
        self.scale == Real::ONE
            && self.rotation == UnitQuaternion::identity()
            && self.offset == Vector3::zeros()
    }
}

/// Check that every segment fits within a buffer of `len` vertices, returning their ranges.
pub(crate) fn validate_ranges<Real: Float, Idx: ArrayIndex>(
    segments: &[Segment<Real, Idx>],
    len: usize,
) -> Result<Vec<Range<usize>>, Error<Idx>> {
    if segments.is_empty() {
        return Err(Error::EmptyBatch);
    }
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| match seg.range() {
            Some(range) if range.end <= len => Ok(range),
            _ => Err(Error::OutOfRange {
                segment: i,
                start: seg.start,
                length: seg.length,
                len,
            }),
        })
        .collect()
}

/// Order segment indices by range start, failing if any two ranges share a vertex.
///
/// Empty ranges never overlap anything.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn disjoint_order<Idx: ArrayIndex>(
    ranges: &[Range<usize>],
) -> Result<Vec<usize>, Error<Idx>> {
    let mut order: Vec<usize> = (0..ranges.len()).filter(|&i| !ranges[i].is_empty()).collect();
    order.sort_by_key(|&i| (ranges[i].start, i));
    for pair in order.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if ranges[b].start < ranges[a].end {
            return Err(Error::OverlappingSegments {
                first: a.min(b),
                second: a.max(b),
            });
        }
    }
    Ok(order)
}
