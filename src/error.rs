use thiserror::Error;

/// Raised while building a [`crate::biology::TopicDirectory`] from chapter data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("chapter id '{0}' is used more than once")]
    DuplicateChapter(String),

    #[error("topic id '{topic_id}' is used more than once in chapter '{chapter_id}'")]
    DuplicateTopic { chapter_id: String, topic_id: String },
}

/// The one failure kind of the content core: something addressed by id does not exist.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown chapter '{0}'")]
    UnknownChapter(String),

    #[error("unknown topic '{topic_id}' in chapter '{chapter_id}'")]
    UnknownTopic { chapter_id: String, topic_id: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {choice} does not exist, question has {options} options")]
    OptionOutOfRange { choice: usize, options: usize },

    #[error("quiz is already complete")]
    Completed,
}
