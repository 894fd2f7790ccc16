use std::ops::Range;

use nalgebra::{Point3, Vector3, Vector4};

use crate::Float;

/// Errors related to [VertexBuffers](VertexBuffer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("Vertex attributes differ in length: {positions} positions, {normals} normals, {tangents} tangents")]
    MismatchedAttributes {
        positions: usize,
        normals: usize,
        tangents: usize,
    },
}

/// Per-vertex mesh data, stored as three parallel arrays.
///
/// # Invariants
///
/// * `positions.len()` == `normals.len()` == `tangents.len()`
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer<Real: Float> {
    positions: Vec<Point3<Real>>,
    normals: Vec<Vector3<Real>>,
    /// `xyz` is the tangent direction; `w` is the bitangent sign, and is never transformed.
    tangents: Vec<Vector4<Real>>,
}

impl<Real: Float> Default for VertexBuffer<Real> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            tangents: Vec::new(),
        }
    }
}

impl<Real: Float> VertexBuffer<Real> {
    pub fn new(
        positions: Vec<Point3<Real>>,
        normals: Vec<Vector3<Real>>,
        tangents: Vec<Vector4<Real>>,
    ) -> Result<Self, BufferError> {
        if positions.len() != normals.len() || positions.len() != tangents.len() {
            return Err(BufferError::MismatchedAttributes {
                positions: positions.len(),
                normals: normals.len(),
                tangents: tangents.len(),
            });
        }
        Ok(Self {
            positions,
            normals,
            tangents,
        })
    }

    /// Construct a buffer from positions alone; normals and tangents are zeroed.
    pub fn from_positions(positions: Vec<Point3<Real>>) -> Self {
        let len = positions.len();
        Self {
            positions,
            normals: vec![Vector3::zeros(); len],
            tangents: vec![Vector4::zeros(); len],
        }
    }

    /// The number of vertices in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Point3<Real>] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3<Real>] {
        &self.normals
    }

    #[inline]
    pub fn tangents(&self) -> &[Vector4<Real>] {
        &self.tangents
    }

    /// Append a single vertex.
    pub fn push(&mut self, position: Point3<Real>, normal: Vector3<Real>, tangent: Vector4<Real>) {
        self.positions.push(position);
        self.normals.push(normal);
        self.tangents.push(tangent);
    }

    /// Append every vertex of `other`, returning the index of the first appended vertex.
    pub fn append(&mut self, other: &Self) -> usize {
        let start = self.len();
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tangents.extend_from_slice(&other.tangents);
        start
    }

    pub fn into_parts(self) -> (Vec<Point3<Real>>, Vec<Vector3<Real>>, Vec<Vector4<Real>>) {
        (self.positions, self.normals, self.tangents)
    }

    /// A mutable view over every vertex in the buffer.
    #[inline]
    pub fn as_slice_mut(&mut self) -> VertexSliceMut<'_, Real> {
        VertexSliceMut {
            positions: &mut self.positions,
            normals: &mut self.normals,
            tangents: &mut self.tangents,
        }
    }
}

/// A mutable view over a contiguous run of vertices within a [VertexBuffer].
///
/// Views can be split into disjoint sub-views, each of which may be handed to a different thread.
///
/// # Invariants
///
/// * `positions.len()` == `normals.len()` == `tangents.len()`
#[derive(Debug)]
pub struct VertexSliceMut<'buf, Real: Float> {
    positions: &'buf mut [Point3<Real>],
    normals: &'buf mut [Vector3<Real>],
    tangents: &'buf mut [Vector4<Real>],
}

impl<'buf, Real: Float> VertexSliceMut<'buf, Real> {
    pub fn new(
        positions: &'buf mut [Point3<Real>],
        normals: &'buf mut [Vector3<Real>],
        tangents: &'buf mut [Vector4<Real>],
    ) -> Result<Self, BufferError> {
        if positions.len() != normals.len() || positions.len() != tangents.len() {
            return Err(BufferError::MismatchedAttributes {
                positions: positions.len(),
                normals: normals.len(),
                tangents: tangents.len(),
            });
        }
        Ok(Self {
            positions,
            normals,
            tangents,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Shorten the lifetime of `self`, so that it can be passed by value without being consumed.
    #[inline]
    pub fn reborrow(&mut self) -> VertexSliceMut<'_, Real> {
        VertexSliceMut {
            positions: &mut *self.positions,
            normals: &mut *self.normals,
            tangents: &mut *self.tangents,
        }
    }

    /// A sub-view over `range`.
    ///
    /// # Panics
    ///
    /// * `range` ⊄ `0..self.len()`
    #[inline]
    pub fn range(&mut self, range: Range<usize>) -> VertexSliceMut<'_, Real> {
        VertexSliceMut {
            positions: &mut self.positions[range.clone()],
            normals: &mut self.normals[range.clone()],
            tangents: &mut self.tangents[range],
        }
    }

    /// Divide `self` into `0..mid` and `mid..len`.
    ///
    /// # Panics
    ///
    /// * `mid` > `self.len()`
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let Self {
            positions,
            normals,
            tangents,
        } = self;
        let (p_head, p_tail) = positions.split_at_mut(mid);
        let (n_head, n_tail) = normals.split_at_mut(mid);
        let (t_head, t_tail) = tangents.split_at_mut(mid);
        (
            Self {
                positions: p_head,
                normals: n_head,
                tangents: t_head,
            },
            Self {
                positions: p_tail,
                normals: n_tail,
                tangents: t_tail,
            },
        )
    }

    /// Divide `self` into one view per range, in the order given.
    ///
    /// Vertices between ranges are left out of every view.
    ///
    /// # Panics
    ///
    /// * `ranges` is not sorted by start, or any two ranges overlap
    /// * any range ⊄ `0..self.len()`
    pub fn split_disjoint(self, ranges: &[Range<usize>]) -> Vec<Self> {
        let mut views = Vec::with_capacity(ranges.len());
        let mut rest = self;
        let mut consumed = 0;
        for range in ranges {
            assert!(
                range.start >= consumed,
                "ranges must be sorted and disjoint: {range:?} begins before {consumed}"
            );
            let (_, tail) = rest.split_at(range.start - consumed);
            let (view, tail) = tail.split_at(range.len());
            views.push(view);
            rest = tail;
            consumed = range.end;
        }
        views
    }

    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Point3<Real>] {
        &mut *self.positions
    }

    /// Borrow all three attribute slices at once.
    #[inline]
    #[allow(clippy::type_complexity)]
    pub fn parts_mut(
        &mut self,
    ) -> (
        &mut [Point3<Real>],
        &mut [Vector3<Real>],
        &mut [Vector4<Real>],
    ) {
        (
            &mut *self.positions,
            &mut *self.normals,
            &mut *self.tangents,
        )
    }

    /// Iterate over `(position, normal, tangent)` for every vertex in the view.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&mut Point3<Real>, &mut Vector3<Real>, &mut Vector4<Real>)> {
        self.positions
            .iter_mut()
            .zip(self.normals.iter_mut())
            .zip(self.tangents.iter_mut())
            .map(|((p, n), t)| (p, n, t))
    }
}
