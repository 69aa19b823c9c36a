//! Node storage requests.
//!
//! A list asks its allocator for room before storing each node, so a
//! failed request surfaces as a `ListError` instead of aborting.

use crate::{error::ListError, list::Node};

/// Grants (or refuses) storage for one more node in a list's arena.
pub trait NodeAllocator {
    fn reserve(&mut self, arena: &mut Vec<Node>) -> Result<(), ListError>;
}

/// Backed by the global allocator through `Vec::try_reserve`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl NodeAllocator for SystemAllocator {
    fn reserve(&mut self, arena: &mut Vec<Node>) -> Result<(), ListError> {
        let request = arena.len() + 1;
        arena
            .try_reserve(1)
            .map_err(|e| ListError::allocation(request, Some(e)))
    }
}

/// Simulates running out of memory.
///
/// Requests before `fail_on` are served by [`SystemAllocator`]; request
/// `fail_on` and every one after it are refused. A threshold of 0 refuses
/// everything.
#[derive(Debug, Clone)]
pub struct FailingAllocator {
    fail_on: usize,
    requests: usize,
}

impl FailingAllocator {
    pub fn on_request(fail_on: usize) -> Self {
        Self {
            fail_on,
            requests: 0,
        }
    }

    /// Requests seen so far, including refused ones.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl NodeAllocator for FailingAllocator {
    fn reserve(&mut self, arena: &mut Vec<Node>) -> Result<(), ListError> {
        self.requests += 1;
        if self.requests >= self.fail_on {
            return Err(ListError::allocation(self.requests, None));
        }
        SystemAllocator.reserve(arena)
    }
}
