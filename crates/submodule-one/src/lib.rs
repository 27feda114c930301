//! submodule-one: entry object wired to the `mainlibrary` collaborator.

pub mod one_entry;

pub use one_entry::OneEntry;
