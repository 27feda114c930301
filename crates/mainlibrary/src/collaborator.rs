//! The capability an entry object delegates to.

/// An object that can be created without inputs and invoked from an entry.
///
/// Implementations own their state; `create` must hand out a fresh instance
/// every time.
pub trait Collaborator: Sized {
    /// Failure raised by construction or invocation.
    type Error;

    /// Build a fresh, unshared instance.
    fn create() -> Result<Self, Self::Error>;

    /// The delegated operation. No input, no output beyond success or failure.
    fn invoked_from_one(&mut self) -> Result<(), Self::Error>;
}
