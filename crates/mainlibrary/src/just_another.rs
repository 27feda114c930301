//! Stock collaborator.

use std::convert::Infallible;

use tracing::debug;

use crate::collaborator::Collaborator;
use crate::config::CollaboratorConfig;

/// Default collaborator used by entry objects.
#[derive(Debug, Default)]
pub struct JustAnother {
    config: CollaboratorConfig,
    invocations: u64,
}

impl JustAnother {
    pub fn with_config(config: CollaboratorConfig) -> Self {
        Self {
            config,
            invocations: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Number of times `invoked_from_one` ran on this instance.
    pub fn invocations(&self) -> u64 {
        self.invocations
    }
}

impl Collaborator for JustAnother {
    type Error = Infallible;

    fn create() -> Result<Self, Self::Error> {
        Ok(Self::default())
    }

    fn invoked_from_one(&mut self) -> Result<(), Self::Error> {
        self.invocations += 1;
        debug!(
            label = %self.config.label,
            invocation = self.invocations,
            "invoked from one"
        );
        Ok(())
    }
}
