use flexure::{Segment, VertexBuffer};
use nalgebra::{point, vector, Point3, UnitQuaternion, Vector3, Vector4};
use quickcheck::{Arbitrary, Gen};

/// A finite value in `-8..8`.
pub fn small(g: &mut Gen) -> f64 {
    f64::from(i16::arbitrary(g)) / 4096.0
}

/// A finite value in `0.125..8`, with random sign.
pub fn nonzero(g: &mut Gen) -> f64 {
    let magnitude = 0.125 + f64::from(u16::arbitrary(g)) / 8192.0;
    if bool::arbitrary(g) {
        magnitude
    } else {
        -magnitude
    }
}

pub fn position(g: &mut Gen) -> Point3<f64> {
    point![small(g), small(g), small(g)]
}

pub fn rotation(g: &mut Gen) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(small(g), small(g), small(g))
}

pub fn push_vertex(g: &mut Gen, buffer: &mut VertexBuffer<f64>) {
    let normal = rotation(g) * Vector3::y();
    let tangent = rotation(g) * Vector3::x();
    let sign = if bool::arbitrary(g) { 1.0 } else { -1.0 };
    buffer.push(
        position(g),
        normal,
        Vector4::new(tangent.x, tangent.y, tangent.z, sign),
    );
}

/// A buffer with disjoint segments laid over it, some vertices left uncovered between them.
#[derive(Debug, Clone)]
pub struct Layout {
    pub buffer: VertexBuffer<f64>,
    pub segments: Vec<Segment<f64>>,
}

impl Arbitrary for Layout {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 6 + 1;
        let mut buffer = VertexBuffer::default();
        let mut segments = Vec::with_capacity(count);
        for _ in 0..count {
            for _ in 0..u8::arbitrary(g) % 3 {
                push_vertex(g, &mut buffer);
            }
            let start = buffer.len() as u32;
            let length = u32::from(u8::arbitrary(g) % 5);
            for _ in 0..length {
                push_vertex(g, &mut buffer);
            }
            segments.push(
                Segment::new(start, length)
                    .with_offset(vector![small(g), small(g), small(g)])
                    .with_scale(nonzero(g))
                    .with_rotation(rotation(g))
                    .with_bending(small(g) / 8.0),
            );
        }
        if bool::arbitrary(g) {
            segments.reverse();
        }
        Self { buffer, segments }
    }
}
