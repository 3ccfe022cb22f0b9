//! Face replication: rotate one curved face into all four positions and
//! merge the copies into a single index space.
//!
//! Serial and parallel implementations sit behind [`ReplicateOps`] and
//! produce identical meshes.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use serial::SerialReplicateOps;
pub use traits::ReplicateOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelReplicateOps;

/// The replication strategy picked by the crate features.
#[cfg(not(feature = "parallel"))]
pub type DefaultReplicateOps = SerialReplicateOps;

/// The replication strategy picked by the crate features.
#[cfg(feature = "parallel")]
pub type DefaultReplicateOps = ParallelReplicateOps;
