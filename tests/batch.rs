mod common;

use common::*;
use flexure::{BatchOptions, BendScope, DeformableMesh, Error, Segment, SegmentBatch, VertexBuffer};
use nalgebra::{point, vector, UnitQuaternion, Vector4};

/// Stands in for an engine mesh, counting how many times data was pushed back to it.
#[derive(Debug)]
struct Mesh {
    buffer: VertexBuffer<f64>,
    uploads: usize,
}

impl DeformableMesh<f64> for Mesh {
    fn vertex_buffer(&self) -> VertexBuffer<f64> {
        self.buffer.clone()
    }

    fn set_vertex_buffer(&mut self, buffer: VertexBuffer<f64>) {
        self.buffer = buffer;
        self.uploads += 1;
    }
}

fn sample_batch() -> SegmentBatch<f64> {
    let mut batch = SegmentBatch::new();
    batch
        .add_segment(0, 2, vector![0.0, 0.0, 0.0], 2.0, UnitQuaternion::identity(), 0.0)
        .add_segment(2, 2, vector![5.0, 0.0, 0.0], 1.0, UnitQuaternion::identity(), 0.0);
    batch
}

#[test]
fn execute_bound_target() {
    let mut batch = sample_batch();
    assert_eq!(batch.len(), 2);
    assert!(batch.bind(strip()).is_none());
    let result = batch.execute().unwrap();
    assert_eq!(result.positions()[1], point![4.0, 0.0, 0.0]);
    assert_eq!(result.positions()[3], point![9.0, 0.0, 0.0]);
    // the target stays bound after execution
    assert!(batch.target().is_some());
    let taken = batch.take_target().unwrap();
    assert_eq!(taken.positions()[0], point![2.0, 0.0, 0.0]);
    assert!(batch.target().is_none());
}

#[test]
fn execute_without_target() {
    let mut batch = sample_batch();
    assert_eq!(batch.execute().unwrap_err(), Error::NoTarget);
}

#[test]
fn execute_empty_batch() {
    let mut batch = SegmentBatch::<f64>::new();
    batch.bind(strip());
    assert!(batch.is_empty());
    assert_eq!(batch.execute().unwrap_err(), Error::EmptyBatch);
    assert_eq!(batch.target(), Some(&strip()));
}

#[test]
fn failed_execute_keeps_target() {
    let mut batch = sample_batch();
    batch.push(Segment::new(3, 5));
    batch.bind(strip());
    assert!(matches!(
        batch.execute(),
        Err(Error::OutOfRange { segment: 2, .. })
    ));
    assert_eq!(batch.target(), Some(&strip()));
}

#[test]
fn clear_drops_segments_and_target() {
    let mut batch =
        SegmentBatch::<f64>::with_options(BatchOptions::default().with_bend(BendScope::Segment));
    for seg in sample_batch().segments() {
        batch.push(*seg);
    }
    batch.bind(strip());
    batch.clear();
    assert!(batch.is_empty());
    assert!(batch.target().is_none());
    assert_eq!(batch.options().bend, BendScope::Segment);
}

#[test]
fn clear_target_keeps_segments() {
    let mut batch = sample_batch();
    batch.bind(strip());
    batch.clear_target();
    assert_eq!(batch.segments().len(), 2);
    assert!(batch.target().is_none());
}

#[test]
fn rebinding_returns_previous_target() {
    let mut batch = sample_batch();
    batch.bind(strip());
    let previous = batch.bind(VertexBuffer::default()).unwrap();
    assert_eq!(previous, strip());
}

#[test]
fn execute_on_ignores_target() {
    let batch = sample_batch();
    let mut buffer = strip();
    batch.execute_on(&mut buffer).unwrap();
    assert_eq!(buffer.positions()[2], point![8.0, 0.0, 0.0]);
}

#[test]
fn execute_mesh_writes_back_once() {
    let batch = sample_batch();
    let mut mesh = Mesh {
        buffer: strip(),
        uploads: 0,
    };
    batch.execute_mesh(&mut mesh).unwrap();
    assert_eq!(mesh.uploads, 1);
    assert_eq!(mesh.buffer.positions()[3], point![9.0, 0.0, 0.0]);
}

#[test]
fn failed_execute_mesh_writes_nothing() {
    let batch = sample_batch();
    let mut mesh = Mesh {
        buffer: VertexBuffer::from_positions(vec![point![1.0, 0.0, 0.0]; 3]),
        uploads: 0,
    };
    assert!(batch.execute_mesh(&mut mesh).is_err());
    assert_eq!(mesh.uploads, 0);
}

#[test]
fn bind_mesh_copies() {
    let mesh = Mesh {
        buffer: strip(),
        uploads: 0,
    };
    let mut batch = sample_batch();
    batch.bind_mesh(&mesh);
    batch.execute().unwrap();
    assert_eq!(mesh.buffer, strip());
    assert_point_near(&batch.target().unwrap().positions()[0], &point![2.0, 0.0, 0.0]);
}

#[test]
fn vertex_buffer_is_its_own_mesh() {
    let batch = sample_batch();
    let mut buffer = strip();
    batch.execute_mesh(&mut buffer).unwrap();
    assert_eq!(buffer.positions()[0], point![2.0, 0.0, 0.0]);
}

#[test]
fn options_mut_changes_options() {
    let mut batch = sample_batch();
    batch.options_mut().bend = BendScope::Segment;
    batch.options_mut().chunk_size = 16;
    assert_eq!(
        *batch.options(),
        BatchOptions::default()
            .with_bend(BendScope::Segment)
            .with_chunk_size(16)
    );
}

#[test]
fn target_mut_edits_bound_target() {
    let mut batch = sample_batch();
    assert!(batch.target_mut().is_none());
    batch.bind(strip());
    batch
        .target_mut()
        .unwrap()
        .push(point![7.0, 0.0, 0.0], vector![0.0, 1.0, 0.0], Vector4::x());
    let result = batch.execute().unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(result.positions()[3], point![9.0, 0.0, 0.0]);
    assert_eq!(result.positions()[4], point![7.0, 0.0, 0.0]);
}
