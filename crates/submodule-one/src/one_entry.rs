//! Entry object that forwards work to an owned collaborator.

use mainlibrary::{Collaborator, JustAnother};

/// Owns exactly one collaborator for its whole lifetime and forwards
/// `do_work` to it.
///
/// Only code inside this crate can construct an entry.
#[derive(Debug)]
pub struct OneEntry<C: Collaborator = JustAnother> {
    collaborator: C,
}

impl<C: Collaborator> OneEntry<C> {
    /// Create the entry together with a fresh collaborator. A construction
    /// failure of the collaborator is returned as-is.
    #[allow(dead_code)]
    pub(crate) fn new() -> Result<Self, C::Error> {
        Ok(Self {
            collaborator: C::create()?,
        })
    }

    /// Invoke the collaborator's `invoked_from_one` once.
    pub fn do_work(&mut self) -> Result<(), C::Error> {
        self.collaborator.invoked_from_one()
    }

    #[cfg(test)]
    pub(crate) fn collaborator(&self) -> &C {
        &self.collaborator
    }
}
