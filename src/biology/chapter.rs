use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Topic {
    /// topic id, unique within its chapter only
    pub id: String,

    /// display title
    pub title: String,
}

impl Topic {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Chapter {
    /// chapter id, unique within the directory
    pub id: String,

    pub title: String,

    pub description: String,

    /// topics in reading order
    pub topics: Vec<Topic>,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        topics: Vec<Topic>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            topics,
        }
    }

    pub fn first_topic(&self) -> Option<&Topic> {
        self.topics.first()
    }

    pub fn last_topic(&self) -> Option<&Topic> {
        self.topics.last()
    }
}

/// Address of a topic page, `/biology/{chapter_id}/{topic_id}`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct TopicRef<'a> {
    pub chapter_id: &'a str,
    pub topic_id: &'a str,
}

impl<'a> TopicRef<'a> {
    pub fn new(chapter_id: &'a str, topic_id: &'a str) -> Self {
        Self {
            chapter_id,
            topic_id,
        }
    }

    pub(crate) fn of(chapter: &'a Chapter, topic: &'a Topic) -> Self {
        Self::new(&chapter.id, &topic.id)
    }

    pub fn path(&self) -> String {
        self.link(ContentType::Notes)
    }

    pub fn link(&self, content_type: ContentType) -> String {
        topic_link(self.chapter_id, self.topic_id, content_type)
    }

    /// `{chapter_id}-{topic_id}`, the `topic` query value of the practice pages.
    pub fn key(&self) -> String {
        format!("{}-{}", self.chapter_id, self.topic_id)
    }
}

/// How a topic is studied from the topic browser.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Notes,
    Questions,
    Flashcards,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Notes,
        ContentType::Questions,
        ContentType::Flashcards,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ContentType::Notes => "notes",
            ContentType::Questions => "questions",
            ContentType::Flashcards => "flashcards",
        }
    }

    pub fn from_id(id: &str) -> Option<ContentType> {
        ContentType::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// Link a topic browser entry points to: the notes page, or the quiz or
/// flashcards scoped to the topic.
pub fn topic_link(chapter_id: &str, topic_id: &str, content_type: ContentType) -> String {
    match content_type {
        ContentType::Notes => format!("/biology/{chapter_id}/{topic_id}"),
        ContentType::Questions => format!("/quiz?topic={chapter_id}-{topic_id}"),
        ContentType::Flashcards => format!("/flashcards?topic={chapter_id}-{topic_id}"),
    }
}
