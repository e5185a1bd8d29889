//! Application services - orchestrate the ports for each use case.

mod post;
mod reference;

pub use post::PostService;
pub use reference::ReferenceService;

#[cfg(test)]
pub(crate) mod fakes;
