//! mainlibrary: collaborator types shared with sibling crates.
//!
//! This crate defines the `Collaborator` seam that entry objects delegate to,
//! the stock `JustAnother` collaborator, and test doubles usable from any
//! crate in the workspace.

pub mod collaborator;
pub mod config;
pub mod just_another;
pub mod mock;

pub use collaborator::Collaborator;
pub use config::{CollaboratorConfig, ConfigError, LibraryConfig};
pub use just_another::JustAnother;
pub use mock::{
    FailingCollaborator, MockFailure, RecordingCollaborator, UnconstructibleCollaborator,
};
