//! Version control identity extraction.
//!
//! This module turns the free-form `repository` field of a package manifest
//! into a structured [`VcsIdentity`], or explains why it could not.

mod error;
mod identity;
mod parser;
mod resolver;

pub use error::UnresolvedVcs;
pub use identity::{Provider, VcsIdentity};
pub use parser::parse_repository;
pub use resolver::{resolve_vcs, RepositoryField};
