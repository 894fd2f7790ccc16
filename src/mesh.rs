use crate::{Float, VertexBuffer};

/// Trait for host-owned meshes whose vertices can be read out and written back.
///
/// This is the only view `flexure` has of a renderable mesh; uploading the written data to the
/// GPU (or wherever else it needs to go) is up to the implementor.
pub trait DeformableMesh<Real: Float> {
    /// Copy the mesh's current positions, normals, and tangents.
    fn vertex_buffer(&self) -> VertexBuffer<Real>;
    /// Replace the mesh's positions, normals, and tangents.
    fn set_vertex_buffer(&mut self, buffer: VertexBuffer<Real>);
}

impl<Real: Float> DeformableMesh<Real> for VertexBuffer<Real> {
    #[inline]
    fn vertex_buffer(&self) -> VertexBuffer<Real> {
        self.clone()
    }

    #[inline]
    fn set_vertex_buffer(&mut self, buffer: VertexBuffer<Real>) {
        *self = buffer;
    }
}
