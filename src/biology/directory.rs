use std::collections::HashMap;

use crate::error::DirectoryError;

use super::chapter::{Chapter, Topic, TopicRef};

#[derive(Debug)]
struct ChapterSlot {
    position: usize,
    topics: HashMap<String, usize>,
}

/// Ordered chapter/topic hierarchy with id indexes built once at construction.
///
/// Reading order is chapter order, then topic order within a chapter. Moving
/// past either end of that order yields `None`; there is no wraparound.
#[derive(Debug)]
pub struct TopicDirectory {
    chapters: Vec<Chapter>,
    index: HashMap<String, ChapterSlot>,
}

impl TopicDirectory {
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, DirectoryError> {
        let mut index = HashMap::with_capacity(chapters.len());

        for (position, chapter) in chapters.iter().enumerate() {
            let mut topics = HashMap::with_capacity(chapter.topics.len());
            for (topic_position, topic) in chapter.topics.iter().enumerate() {
                if topics.insert(topic.id.clone(), topic_position).is_some() {
                    return Err(DirectoryError::DuplicateTopic {
                        chapter_id: chapter.id.clone(),
                        topic_id: topic.id.clone(),
                    });
                }
            }

            if index
                .insert(chapter.id.clone(), ChapterSlot { position, topics })
                .is_some()
            {
                return Err(DirectoryError::DuplicateChapter(chapter.id.clone()));
            }
        }

        log::debug!(
            "indexed {} chapters with {} topics",
            chapters.len(),
            chapters.iter().map(|c| c.topics.len()).sum::<usize>()
        );

        Ok(Self { chapters, index })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.index
            .get(chapter_id)
            .map(|slot| &self.chapters[slot.position])
    }

    /// Resolves a topic together with its owning chapter.
    pub fn topic(&self, chapter_id: &str, topic_id: &str) -> Option<(&Topic, &Chapter)> {
        let (chapter_position, topic_position) = self.locate(chapter_id, topic_id)?;
        let chapter = &self.chapters[chapter_position];
        Some((&chapter.topics[topic_position], chapter))
    }

    /// Resolves a `{chapter_id}-{topic_id}` key as used in `?topic=` links.
    /// Chapter ids contain dashes themselves, so every chapter whose id
    /// prefixes the key is tried.
    pub fn topic_by_key(&self, key: &str) -> Option<TopicRef<'_>> {
        self.chapters.iter().find_map(|chapter| {
            let topic_id = key.strip_prefix(chapter.id.as_str())?.strip_prefix('-')?;
            let (topic, chapter) = self.topic(&chapter.id, topic_id)?;
            Some(TopicRef::of(chapter, topic))
        })
    }

    /// 1-based position of a topic within its chapter, with the chapter's topic count.
    pub fn position_in_chapter(&self, chapter_id: &str, topic_id: &str) -> Option<(usize, usize)> {
        let (chapter_position, topic_position) = self.locate(chapter_id, topic_id)?;
        Some((
            topic_position + 1,
            self.chapters[chapter_position].topics.len(),
        ))
    }

    pub fn all_topics(&self) -> Vec<&Topic> {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.topics.iter())
            .collect()
    }

    pub fn total_topics(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.topics.len()).sum()
    }

    pub fn next_topic(&self, chapter_id: &str, topic_id: &str) -> Option<TopicRef<'_>> {
        let (chapter_position, topic_position) = self.locate(chapter_id, topic_id)?;
        let chapter = &self.chapters[chapter_position];

        if let Some(topic) = chapter.topics.get(topic_position + 1) {
            return Some(TopicRef::of(chapter, topic));
        }

        // only the immediate neighbour is considered, an empty chapter ends the walk
        let next_chapter = self.chapters.get(chapter_position + 1)?;
        next_chapter
            .first_topic()
            .map(|topic| TopicRef::of(next_chapter, topic))
    }

    pub fn previous_topic(&self, chapter_id: &str, topic_id: &str) -> Option<TopicRef<'_>> {
        let (chapter_position, topic_position) = self.locate(chapter_id, topic_id)?;
        let chapter = &self.chapters[chapter_position];

        if topic_position > 0 {
            return Some(TopicRef::of(chapter, &chapter.topics[topic_position - 1]));
        }

        let previous_chapter = self.chapters.get(chapter_position.checked_sub(1)?)?;
        previous_chapter
            .last_topic()
            .map(|topic| TopicRef::of(previous_chapter, topic))
    }

    /// Every topic address in reading order, for static page generation.
    pub fn static_params(&self) -> Vec<TopicRef<'_>> {
        self.chapters
            .iter()
            .flat_map(|chapter| {
                chapter
                    .topics
                    .iter()
                    .map(move |topic| TopicRef::of(chapter, topic))
            })
            .collect()
    }

    fn locate(&self, chapter_id: &str, topic_id: &str) -> Option<(usize, usize)> {
        let slot = self.index.get(chapter_id)?;
        let topic_position = slot.topics.get(topic_id)?;
        Some((slot.position, *topic_position))
    }
}
