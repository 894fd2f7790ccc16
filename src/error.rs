use flexure_common::ArrayIndex;

/// Errors related to [segment batches](crate::SegmentBatch).
///
/// Every variant is raised before any vertex is touched, so a batch which fails leaves its
/// buffer exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<Idx: ArrayIndex> {
    #[error("Segment {segment} spans vertices {start}..{start}+{length}, outside of buffer: (0..{len}) ⊉ that range")]
    OutOfRange {
        /// Position of the offending segment within its batch.
        segment: usize,
        start: Idx,
        length: Idx,
        /// Vertex count of the buffer.
        len: usize,
    },
    #[error("Attempted to execute a batch containing no segments")]
    EmptyBatch,
    #[error("Segments {first} and {second} cover overlapping vertex ranges and cannot run in parallel")]
    OverlappingSegments { first: usize, second: usize },
    #[error("Attempted to execute a batch with no target buffer bound")]
    NoTarget,
}
