use flexure_common::ArrayIndex;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    apply_segments_with, BatchOptions, DeformableMesh, Error, Float, Segment, VertexBuffer,
};

/// A reusable list of [Segments](Segment), optionally bound to the buffer it deforms.
///
/// A batch is meant to be cleared and refilled each time its mesh needs rebuilding:
///
/// ```
/// # use flexure::{SegmentBatch, VertexBuffer};
/// # use nalgebra::{point, vector, UnitQuaternion};
/// let mut batch = SegmentBatch::<f32>::new();
/// batch.bind(VertexBuffer::from_positions(vec![point![1.0, 0.0, 0.0]; 4]));
/// batch
///     .add_segment(0, 2, vector![0.0, 1.0, 0.0], 2.0, UnitQuaternion::identity(), 0.0)
///     .add_segment(2, 2, vector![0.0, 0.0, 0.0], 1.0, UnitQuaternion::identity(), 0.0);
/// let mesh = batch.execute().unwrap();
/// assert_eq!(mesh.positions()[0], point![2.0, 1.0, 0.0]);
/// batch.clear();
/// ```
#[derive(Debug, Clone)]
pub struct SegmentBatch<Real: Float, Idx: ArrayIndex = u32> {
    segments: Vec<Segment<Real, Idx>>,
    options: BatchOptions,
    target: Option<VertexBuffer<Real>>,
}

impl<Real: Float, Idx: ArrayIndex> Default for SegmentBatch<Real, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Real: Float, Idx: ArrayIndex> SegmentBatch<Real, Idx> {
    pub fn new() -> Self {
        Self::with_options(BatchOptions::default())
    }

    pub fn with_options(options: BatchOptions) -> Self {
        Self {
            segments: Vec::new(),
            options,
            target: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut BatchOptions {
        &mut self.options
    }

    /// Remove every segment and unbind the target buffer. Options are kept.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.clear_target();
    }

    /// Unbind the target buffer, leaving segments in place.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Bind `buffer` as the target of [execute](Self::execute), returning the previous target.
    pub fn bind(&mut self, buffer: VertexBuffer<Real>) -> Option<VertexBuffer<Real>> {
        self.target.replace(buffer)
    }

    /// Bind a copy of `mesh`'s vertex data as the target, returning the previous target.
    pub fn bind_mesh<M: DeformableMesh<Real> + ?Sized>(
        &mut self,
        mesh: &M,
    ) -> Option<VertexBuffer<Real>> {
        self.bind(mesh.vertex_buffer())
    }

    #[inline]
    pub fn target(&self) -> Option<&VertexBuffer<Real>> {
        self.target.as_ref()
    }

    #[inline]
    pub fn target_mut(&mut self) -> Option<&mut VertexBuffer<Real>> {
        self.target.as_mut()
    }

    /// Unbind and return the target buffer.
    pub fn take_target(&mut self) -> Option<VertexBuffer<Real>> {
        self.target.take()
    }

    /// Append a segment covering `start..start + length`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_segment(
        &mut self,
        start: Idx,
        length: Idx,
        offset: Vector3<Real>,
        scale: Real,
        rotation: UnitQuaternion<Real>,
        bending: Real,
    ) -> &mut Self {
        self.push(Segment {
            start,
            length,
            offset,
            scale,
            rotation,
            bending,
        })
    }

    pub fn push(&mut self, segment: Segment<Real, Idx>) -> &mut Self {
        self.segments.push(segment);
        self
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<Real, Idx>] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Apply every segment to the bound target, returning the result.
    ///
    /// On failure, the target is left unchanged and remains bound.
    pub fn execute(&mut self) -> Result<&VertexBuffer<Real>, Error<Idx>> {
        let target = self.target.as_mut().ok_or(Error::NoTarget)?;
        apply_segments_with(target, &self.segments, &self.options)?;
        Ok(target)
    }

    /// Apply every segment to `buffer`, ignoring any bound target.
    pub fn execute_on(&self, buffer: &mut VertexBuffer<Real>) -> Result<(), Error<Idx>> {
        apply_segments_with(buffer, &self.segments, &self.options)
    }

    /// Read `mesh`'s vertex data, apply every segment to it, and write it back.
    ///
    /// Nothing is written to `mesh` on failure.
    pub fn execute_mesh<M: DeformableMesh<Real> + ?Sized>(
        &self,
        mesh: &mut M,
    ) -> Result<(), Error<Idx>> {
        let mut buffer = mesh.vertex_buffer();
        self.execute_on(&mut buffer)?;
        mesh.set_vertex_buffer(buffer);
        Ok(())
    }
}
