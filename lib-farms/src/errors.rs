//! Farm Pipeline Errors

use thiserror::Error;

use lib_types::PoolId;

/// Error during farm derivation
///
/// Reserved for genuinely invalid input. Missing prices or positions are not
/// errors; they propagate as `None` fields in the merged records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Pool {pool_id} has negative allocation points: {alloc_point}")]
    NegativeAllocPoint { pool_id: PoolId, alloc_point: i64 },
}

/// Result type for farm derivation operations
pub type EngineResult<T> = Result<T, EngineError>;
