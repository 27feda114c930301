//! Test doubles for the `Collaborator` seam.
//!
//! Public so entry crates can exercise delegation without the stock
//! collaborator. Every double keeps its state per instance.

use thiserror::Error;

use crate::collaborator::Collaborator;

/// Failure raised by the failing doubles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockFailure {
    #[error("mock construction failed")]
    Construction,
    #[error("mock invocation {0} failed")]
    Invocation(u64),
}

/// Counts every invocation and never fails.
#[derive(Debug, Default)]
pub struct RecordingCollaborator {
    invocations: u64,
}

impl RecordingCollaborator {
    pub fn invocations(&self) -> u64 {
        self.invocations
    }
}

impl Collaborator for RecordingCollaborator {
    type Error = MockFailure;

    fn create() -> Result<Self, Self::Error> {
        Ok(Self::default())
    }

    fn invoked_from_one(&mut self) -> Result<(), Self::Error> {
        self.invocations += 1;
        Ok(())
    }
}

/// Fails every invocation with `MockFailure::Invocation(n)`, where `n` is the
/// 1-based attempt number.
#[derive(Debug, Default)]
pub struct FailingCollaborator {
    attempts: u64,
}

impl FailingCollaborator {
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}

impl Collaborator for FailingCollaborator {
    type Error = MockFailure;

    fn create() -> Result<Self, Self::Error> {
        Ok(Self::default())
    }

    fn invoked_from_one(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(MockFailure::Invocation(self.attempts))
    }
}

/// Cannot be created; `create` always returns `MockFailure::Construction`.
#[derive(Debug)]
pub struct UnconstructibleCollaborator {
    _private: (),
}

impl Collaborator for UnconstructibleCollaborator {
    type Error = MockFailure;

    fn create() -> Result<Self, Self::Error> {
        Err(MockFailure::Construction)
    }

    fn invoked_from_one(&mut self) -> Result<(), Self::Error> {
        unreachable!("UnconstructibleCollaborator cannot be created")
    }
}
