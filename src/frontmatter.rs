use serde::Serialize;

use crate::biology::TopicRef;

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Frontmatter<'a> {
    Title(&'a str),
    Slug(&'a str),
    Parent(ParentMeta<'a>),
    Order(usize),
    Position(PositionMeta),
    Neighbour(Option<NeighbourMeta<'a>>),
    Headings(Vec<Heading>),
}

#[derive(Serialize, Debug)]
pub struct ParentMeta<'a> {
    pub title: &'a str,
    pub slug: &'a str,
}

/// "Topic {index} of {of}" within the chapter
#[derive(Serialize, Debug)]
pub struct PositionMeta {
    pub index: usize,
    pub of: usize,
}

#[derive(Serialize, Debug)]
pub struct NeighbourMeta<'a> {
    pub chapter: &'a str,
    pub slug: &'a str,
    pub href: String,
}

impl<'a> From<TopicRef<'a>> for NeighbourMeta<'a> {
    fn from(topic: TopicRef<'a>) -> Self {
        Self {
            chapter: topic.chapter_id,
            slug: topic.topic_id,
            href: topic.path(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub slug: String,
    pub title: String,
}
