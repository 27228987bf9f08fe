//! Profile storage: the data source port, id allocation, and the repository
//! built on top of them.

pub mod ids;
pub mod repository;
pub mod source;

pub use repository::{ProfileRepository, RepositoryError};
pub use source::{InMemorySource, ProfileSource, SourceError};
