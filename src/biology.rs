//! Biology topic browser: the chapter/topic hierarchy and its study notes.
mod chapter;
mod content;
mod directory;
mod notes;

use std::sync::LazyLock;

pub use chapter::{topic_link, Chapter, ContentType, Topic, TopicRef};
pub use directory::TopicDirectory;
pub use notes::{notes_for, TopicNotes};

static BIOLOGY: LazyLock<TopicDirectory> = LazyLock::new(|| {
    TopicDirectory::new(content::biology_chapters())
        .expect("embedded biology chapters have unique ids")
});

/// The embedded biology directory, built on first use and shared for the
/// life of the process.
pub fn biology() -> &'static TopicDirectory {
    &BIOLOGY
}
