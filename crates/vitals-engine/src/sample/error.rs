use std::fmt;

/// Failure of a one-shot resource reading.
///
/// Sample errors are never fatal: the calculator substitutes a sentinel and
/// keeps its reporting cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The OS introspection call did not succeed.
    ///
    /// `query` names the reading that failed (e.g. `"cpu"`, `"memory"`).
    KernelQueryFailed { query: &'static str },
}

impl SampleError {
    pub(crate) fn kernel(query: &'static str) -> Self {
        Self::KernelQueryFailed { query }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KernelQueryFailed { query } => {
                write!(f, "kernel query failed while sampling {query}")
            }
        }
    }
}

impl std::error::Error for SampleError {}
