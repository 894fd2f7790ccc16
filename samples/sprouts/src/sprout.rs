use flexure::{DeformableMesh, SegmentBatch, VertexBuffer};
use nalgebra::{point, vector, UnitQuaternion, Vector3};

/// Vertices per sprout.
pub const SPROUT_VERTICES: u32 = 4;

/// A mesh made of unit quads, each standing on the origin in the XY plane and facing +Z until
/// a batch moves it into place.
#[derive(Debug, Default)]
pub struct SproutMesh {
    buffer: VertexBuffer<f32>,
    /// Times vertex data has been written back into this mesh.
    uploads: usize,
}

impl SproutMesh {
    pub fn with_sprouts(count: u32) -> Self {
        let mut template = VertexBuffer::default();
        for p in [
            point![-0.5, 0.0, 0.0],
            point![0.5, 0.0, 0.0],
            point![0.5, 1.0, 0.0],
            point![-0.5, 1.0, 0.0],
        ] {
            template.push(p, vector![0.0, 0.0, 1.0], vector![1.0, 0.0, 0.0, 1.0]);
        }
        let mut buffer = VertexBuffer::default();
        for _ in 0..count {
            buffer.append(&template);
        }
        Self { buffer, uploads: 0 }
    }

    #[inline]
    pub fn buffer(&self) -> &VertexBuffer<f32> {
        &self.buffer
    }

    #[inline]
    pub fn uploads(&self) -> usize {
        self.uploads
    }

    /// Number of sprouts in the mesh.
    #[inline]
    pub fn sprouts(&self) -> u32 {
        (self.buffer.len() / SPROUT_VERTICES as usize) as u32
    }

    /// Triangles, as zero-based vertex indices; two per sprout.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.sprouts()).flat_map(|i| {
            let base = i * SPROUT_VERTICES;
            [[base, base + 1, base + 2], [base, base + 2, base + 3]]
        })
    }
}

impl DeformableMesh<f32> for SproutMesh {
    fn vertex_buffer(&self) -> VertexBuffer<f32> {
        self.buffer.clone()
    }

    fn set_vertex_buffer(&mut self, buffer: VertexBuffer<f32>) {
        self.buffer = buffer;
        self.uploads += 1;
    }
}

/// Placement of sprouts along a stem.
#[derive(Debug, Clone, Copy)]
pub struct Whorl {
    pub spacing: f32,
    pub scale: f32,
    pub bending: f32,
    /// Radians about +Y between consecutive sprouts.
    pub twist: f32,
}

impl Whorl {
    /// Fill `batch` with one segment per sprout in `mesh`, replacing whatever it held.
    pub fn fill(&self, batch: &mut SegmentBatch<f32>, mesh: &SproutMesh) {
        batch.clear();
        for i in 0..mesh.sprouts() {
            let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.twist * i as f32);
            batch.add_segment(
                i * SPROUT_VERTICES,
                SPROUT_VERTICES,
                vector![0.0, self.spacing * i as f32, 0.0],
                self.scale,
                rotation,
                self.bending,
            );
        }
    }
}
