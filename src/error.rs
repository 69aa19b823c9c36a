use std::{collections::TryReserveError, error::Error, fmt};

/// Errors raised while building a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Storage for a node could not be obtained.
    ///
    /// `request` is the 1-based number of the node allocation that failed.
    /// `source` is absent when the failure was simulated.
    AllocationFailure {
        request: usize,
        source: Option<TryReserveError>,
    },
}

impl ListError {
    pub fn allocation(request: usize, source: Option<TryReserveError>) -> Self {
        ListError::AllocationFailure { request, source }
    }

    /// Number of the allocation request that failed.
    pub fn request(&self) -> usize {
        match self {
            ListError::AllocationFailure { request, .. } => *request,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::AllocationFailure {
                request,
                source: None,
            } => write!(f, "allocation of node {request} failed (simulated)"),
            ListError::AllocationFailure { request, .. } => {
                write!(f, "allocation of node {request} failed")
            }
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ListError::AllocationFailure {
                source: Some(err), ..
            } => Some(err),
            ListError::AllocationFailure { source: None, .. } => None,
        }
    }
}
