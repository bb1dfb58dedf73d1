use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::biology::{notes_for, TopicDirectory};
use crate::error::ContentError;
use crate::frontmatter::{Frontmatter, Heading, NeighbourMeta, ParentMeta, PositionMeta};

static SUBHEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").expect("subheading pattern is valid"));

/// Renders `/biology/{chapter_id}/{topic_id}` as markdown with YAML frontmatter.
pub fn serialize_topic_page(
    directory: &TopicDirectory,
    chapter_id: &str,
    topic_id: &str,
) -> anyhow::Result<String> {
    if directory.chapter(chapter_id).is_none() {
        return Err(ContentError::UnknownChapter(chapter_id.to_string()).into());
    }
    let (topic, chapter) =
        directory
            .topic(chapter_id, topic_id)
            .ok_or_else(|| ContentError::UnknownTopic {
                chapter_id: chapter_id.to_string(),
                topic_id: topic_id.to_string(),
            })?;
    let (index, of) = directory
        .position_in_chapter(chapter_id, topic_id)
        .ok_or_else(|| ContentError::UnknownTopic {
            chapter_id: chapter_id.to_string(),
            topic_id: topic_id.to_string(),
        })?;
    let order = directory
        .static_params()
        .iter()
        .position(|p| p.chapter_id == chapter_id && p.topic_id == topic_id)
        .unwrap_or_default();

    let notes = notes_for(topic);
    let mut body = String::with_capacity(1200);
    body.push_str(&format!("## {} {{#{}}}\n\n", topic.title, topic.id));
    body.push_str(&notes.introduction);
    body.push_str("\n\n### Key points\n\n");
    for point in &notes.key_points {
        body.push_str(&format!("- {point}\n"));
    }
    body.push_str("\n### Examples\n\n");
    for example in &notes.examples {
        body.push_str(&format!("- {example}\n"));
    }

    let mut headings: Vec<Heading> = vec![];
    let body = transform_content(&body, &mut headings);

    let mut fm: BTreeMap<&str, Frontmatter> = BTreeMap::new();
    fm.insert("title", Frontmatter::Title(topic.title.as_str()));
    fm.insert("slug", Frontmatter::Slug(topic.id.as_str()));
    fm.insert(
        "parent",
        Frontmatter::Parent(ParentMeta {
            title: chapter.title.as_str(),
            slug: chapter.id.as_str(),
        }),
    );
    fm.insert("order", Frontmatter::Order(order));
    fm.insert("position", Frontmatter::Position(PositionMeta { index, of }));
    fm.insert(
        "previous",
        Frontmatter::Neighbour(
            directory
                .previous_topic(chapter_id, topic_id)
                .map(NeighbourMeta::from),
        ),
    );
    fm.insert(
        "next",
        Frontmatter::Neighbour(
            directory
                .next_topic(chapter_id, topic_id)
                .map(NeighbourMeta::from),
        ),
    );
    fm.insert("headings", Frontmatter::Headings(headings));

    Ok(format!(
        r#"---
{}---

{}"#,
        serde_yaml_ng::to_string(&fm)?,
        body
    ))
}

// give level-3 headings anchor ids, the level-2 header already carries the topic slug
fn transform_content(content: &str, headings: &mut Vec<Heading>) -> String {
    let mut slugger = github_slugger::Slugger::default();

    SUBHEADING
        .replace_all(content, |caps: &regex::Captures| {
            let heading_title = &caps[1];
            let id = slugger.slug(heading_title);
            headings.push(Heading {
                slug: id.clone(),
                title: heading_title.to_string(),
                level: 3,
            });
            format!("### {} {{#{}}}", heading_title, id)
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biology::biology;

    #[test]
    fn renders_frontmatter_and_body() {
        let page = serialize_topic_page(biology(), "chapter-1", "variety-living-organisms").unwrap();

        assert!(page.starts_with("---\n"));
        assert!(page.contains("title: Variety of living organisms"));
        assert!(page.contains("slug: variety-living-organisms"));
        assert!(page.contains("order: 1"));
        assert!(page.contains("href: /biology/chapter-2/level-organisation"));
        assert!(page.contains("href: /biology/chapter-1/characteristics-living-organisms"));
        assert!(page.contains("## Variety of living organisms {#variety-living-organisms}"));
        assert!(page.contains("### Key points {#key-points}"));
        assert!(page.contains("### Examples {#examples}"));
        assert!(page.contains("- Fungi: Mushrooms, yeast, mold"));
    }

    #[test]
    fn first_topic_has_no_previous() {
        let page =
            serialize_topic_page(biology(), "chapter-1", "characteristics-living-organisms")
                .unwrap();
        assert!(page.contains("previous: null"));
        assert!(page.contains("order: 0"));
    }

    #[test]
    fn last_topic_has_no_next() {
        let page = serialize_topic_page(biology(), "chapter-5", "cloning").unwrap();
        assert!(page.contains("next: null"));
        assert!(page.contains("index: 4"));
        assert!(page.contains("of: 4"));
    }

    #[test]
    fn unknown_ids_report_what_was_missing() {
        let err = serialize_topic_page(biology(), "chapter-9", "cloning").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ContentError>(),
            Some(&ContentError::UnknownChapter("chapter-9".into()))
        );

        let err = serialize_topic_page(biology(), "chapter-1", "cloning").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ContentError>(),
            Some(&ContentError::UnknownTopic {
                chapter_id: "chapter-1".into(),
                topic_id: "cloning".into(),
            })
        );
    }

    #[test]
    fn subheadings_get_anchor_ids() {
        let mut headings = vec![];
        let out = transform_content("### Cell wall\ntext\n### Cell wall\n", &mut headings);
        assert_eq!(out, "### Cell wall {#cell-wall}\ntext\n### Cell wall {#cell-wall-1}\n");
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].slug, "cell-wall-1");
    }
}
