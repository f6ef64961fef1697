//! Pure extraction over rendered page snapshots.
//!
//! Nothing in here talks to a browser: every function takes a [`PageDocument`]
//! built from serialized DOM, so recorded HTML exercises the same code paths.

pub mod html;
pub mod links;
pub mod metadata;
pub mod structure;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::PageDocument;
