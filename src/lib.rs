//! Content core of the revision hub: the curriculum catalog, the biology
//! topic directory, and the practice quiz and flashcards.
pub mod biology;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flashcards;
pub mod frontmatter;
pub mod page;
pub mod quiz;
pub mod route;
pub mod site;

pub use error::{ContentError, DirectoryError, QuizError};
