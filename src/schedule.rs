//! Execution strategies for a batch of [Segments](crate::Segment).

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub(crate) use parallel::*;

use std::ops::Range;

use flexure_common::ArrayIndex;

use crate::{kernel, Float, Segment, VertexSliceMut};

/// Which vertices a segment's bend reaches, and when it happens relative to the other segments.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BendScope {
    /// Each segment bends the *entire* buffer immediately before placing its own vertices, so
    /// later segments re-bend vertices that earlier segments already bent and placed.
    ///
    /// Bends compound across segments.
    #[default]
    Global,
    /// Every segment bends the entire buffer, in batch order, before any segment is placed.
    ///
    /// Bends still compound across segments, but no bend sees a placed vertex.
    Hoisted,
    /// Each segment bends only its own vertices.
    Segment,
}

/// How a batch is spread across threads.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// One segment at a time, in batch order. Segment ranges may overlap.
    #[default]
    Sequential,
    /// Whole-buffer bends run across vertices, then segments are placed concurrently.
    ///
    /// Segment ranges must be disjoint. [BendScope::Global] cannot be split this way without
    /// changing its result, so it always runs sequentially; its ranges must still be disjoint.
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Settings for executing a batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BatchOptions {
    pub bend: BendScope,
    pub schedule: Schedule,
    /// Minimum number of work items (segments, or vertices for whole-buffer bends) handed to a
    /// single parallel task.
    pub chunk_size: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            bend: BendScope::default(),
            schedule: Schedule::default(),
            chunk_size: 4,
        }
    }
}

impl BatchOptions {
    #[must_use]
    pub fn with_bend(mut self, bend: BendScope) -> Self {
        self.bend = bend;
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Apply `segments` one at a time.
///
/// `ranges[i]` must be the validated range of `segments[i]`.
pub(crate) fn run_sequential<Real: Float, Idx: ArrayIndex>(
    mut vertices: VertexSliceMut<'_, Real>,
    segments: &[Segment<Real, Idx>],
    ranges: &[Range<usize>],
    scope: BendScope,
) {
    match scope {
        BendScope::Global => {
            for (seg, range) in segments.iter().zip(ranges) {
                kernel::bend(&mut vertices, seg.bending);
                kernel::place(&mut vertices.range(range.clone()), seg);
            }
        }
        BendScope::Hoisted => {
            for seg in segments {
                kernel::bend(&mut vertices, seg.bending);
            }
            for (seg, range) in segments.iter().zip(ranges) {
                kernel::place(&mut vertices.range(range.clone()), seg);
            }
        }
        BendScope::Segment => {
            for (seg, range) in segments.iter().zip(ranges) {
                let mut view = vertices.range(range.clone());
                kernel::bend(&mut view, seg.bending);
                kernel::place(&mut view, seg);
            }
        }
    }
}
