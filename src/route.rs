//! Request path resolution.
//!
//! Paths are split into segments, matched against the known page shapes, and
//! every parameter is checked against the catalog or the topic directory.
//! Anything that fails a check resolves to [`Resolution::NotFound`].
//!
//! The only query parameter read is `topic` on `/quiz` and `/flashcards`,
//! a `{chapter_id}-{topic_id}` key scoping the practice page to one topic.
use serde::Serialize;

use crate::biology::{ContentType, TopicDirectory, TopicRef};
use crate::catalog::{self, Board, BoardOffering, Combination, Level, Subject};
use crate::flashcards::FLASHCARDS;
use crate::quiz::QUESTIONS;

/// Where the igcse/edexcel/biology subject hub sends visitors.
pub const TOPIC_BROWSER: &str = "/biology";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Learn,
    Level {
        level: &'a str,
    },
    Board {
        level: &'a str,
        board: &'a str,
    },
    Subject {
        level: &'a str,
        board: &'a str,
        subject: &'a str,
    },
    Biology,
    Topic {
        chapter_id: &'a str,
        topic_id: &'a str,
    },
    Quiz {
        topic: Option<&'a str>,
    },
    Flashcards {
        topic: Option<&'a str>,
    },
}

impl<'a> Route<'a> {
    /// Matches the shape of a path. Fragments and unknown query parameters
    /// are ignored, and parameters are not validated here.
    pub fn parse(path: &'a str) -> Option<Self> {
        let path = path.split('#').next().unwrap_or_default();
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let topic = query_param(query, "topic");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments[..] {
            ["learn"] => Some(Route::Learn),
            ["learn", level] => Some(Route::Level { level }),
            ["learn", level, board] => Some(Route::Board { level, board }),
            ["learn", level, board, subject] => Some(Route::Subject {
                level,
                board,
                subject,
            }),
            ["biology"] => Some(Route::Biology),
            ["biology", chapter_id, topic_id] => Some(Route::Topic {
                chapter_id,
                topic_id,
            }),
            ["quiz"] => Some(Route::Quiz { topic }),
            ["flashcards"] => Some(Route::Flashcards { topic }),
            _ => None,
        }
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    })
}

/// Where a topic browser entry leads for each way of studying it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TopicLinks {
    pub notes: String,
    pub questions: String,
    pub flashcards: String,
}

impl TopicLinks {
    fn of(topic: TopicRef<'_>) -> Self {
        Self {
            notes: topic.link(ContentType::Notes),
            questions: topic.link(ContentType::Questions),
            flashcards: topic.link(ContentType::Flashcards),
        }
    }

    pub fn get(&self, content_type: ContentType) -> &str {
        match content_type {
            ContentType::Notes => &self.notes,
            ContentType::Questions => &self.questions,
            ContentType::Flashcards => &self.flashcards,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TopicListing<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub links: TopicLinks,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChapterSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub topics: Vec<TopicListing<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution<'a> {
    LevelIndex {
        levels: Vec<Level>,
    },
    BoardSelection {
        level: Level,
        boards: &'static [BoardOffering],
    },
    SubjectSelection {
        level: Level,
        board: Board,
        subjects: Vec<Subject>,
    },
    SubjectHub(Combination),
    Redirect {
        location: &'static str,
    },
    ChapterIndex {
        chapters: Vec<ChapterSummary<'a>>,
        total_topics: usize,
    },
    TopicPage {
        chapter_id: &'a str,
        topic_id: &'a str,
        title: &'a str,
        chapter_title: &'a str,
        position: usize,
        of: usize,
        previous: Option<TopicRef<'a>>,
        next: Option<TopicRef<'a>>,
    },
    Quiz {
        questions: usize,
        topic: Option<TopicRef<'a>>,
    },
    Flashcards {
        cards: usize,
        topic: Option<TopicRef<'a>>,
    },
    NotFound,
}

impl Resolution<'_> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Subject hubs that are served by another page instead.
pub fn redirect_for(combination: &Combination) -> Option<&'static str> {
    match (combination.level, combination.board, combination.subject) {
        (Level::Igcse, Board::Edexcel, Subject::Biology) => Some(TOPIC_BROWSER),
        _ => None,
    }
}

pub fn resolve<'a>(path: &str, directory: &'a TopicDirectory) -> Resolution<'a> {
    let Some(route) = Route::parse(path) else {
        log::debug!("no route matches '{path}'");
        return Resolution::NotFound;
    };
    resolve_route(route, directory)
}

pub fn resolve_route<'a>(route: Route<'_>, directory: &'a TopicDirectory) -> Resolution<'a> {
    match route {
        Route::Learn => Resolution::LevelIndex {
            levels: catalog::levels().collect(),
        },
        Route::Level { level } => match Level::from_id(level) {
            Some(parsed) => Resolution::BoardSelection {
                level: parsed,
                boards: catalog::offerings_for_level(level),
            },
            None => Resolution::NotFound,
        },
        Route::Board { level, board } => {
            if !catalog::is_valid_combination(level, board) {
                return Resolution::NotFound;
            }
            match (Level::from_id(level), Board::from_id(board)) {
                (Some(level), Some(board)) => Resolution::SubjectSelection {
                    level,
                    board,
                    subjects: Subject::ALL.to_vec(),
                },
                _ => Resolution::NotFound,
            }
        }
        Route::Subject {
            level,
            board,
            subject,
        } => match catalog::combination(level, board, subject) {
            Some(combination) => match redirect_for(&combination) {
                Some(location) => Resolution::Redirect { location },
                None => Resolution::SubjectHub(combination),
            },
            None => Resolution::NotFound,
        },
        Route::Biology => Resolution::ChapterIndex {
            chapters: directory
                .chapters()
                .iter()
                .map(|chapter| ChapterSummary {
                    id: &chapter.id,
                    title: &chapter.title,
                    topics: chapter
                        .topics
                        .iter()
                        .map(|topic| TopicListing {
                            id: &topic.id,
                            title: &topic.title,
                            links: TopicLinks::of(TopicRef::new(&chapter.id, &topic.id)),
                        })
                        .collect(),
                })
                .collect(),
            total_topics: directory.total_topics(),
        },
        Route::Topic {
            chapter_id,
            topic_id,
        } => {
            let Some((topic, chapter)) = directory.topic(chapter_id, topic_id) else {
                return Resolution::NotFound;
            };
            let (position, of) = directory
                .position_in_chapter(chapter_id, topic_id)
                .unwrap_or_default();
            Resolution::TopicPage {
                chapter_id: &chapter.id,
                topic_id: &topic.id,
                title: &topic.title,
                chapter_title: &chapter.title,
                position,
                of,
                previous: directory.previous_topic(chapter_id, topic_id),
                next: directory.next_topic(chapter_id, topic_id),
            }
        }
        Route::Quiz { topic } => match scoped_topic(topic, directory) {
            Ok(topic) => Resolution::Quiz {
                questions: QUESTIONS.len(),
                topic,
            },
            Err(()) => Resolution::NotFound,
        },
        Route::Flashcards { topic } => match scoped_topic(topic, directory) {
            Ok(topic) => Resolution::Flashcards {
                cards: FLASHCARDS.len(),
                topic,
            },
            Err(()) => Resolution::NotFound,
        },
    }
}

// no key means an unscoped page, a key that names no topic is an error
fn scoped_topic<'a>(
    key: Option<&str>,
    directory: &'a TopicDirectory,
) -> Result<Option<TopicRef<'a>>, ()> {
    match key {
        None => Ok(None),
        Some(key) => directory.topic_by_key(key).map(Some).ok_or_else(|| {
            log::debug!("unknown topic key '{key}'");
        }),
    }
}

/// Every addressable path of the site, each listed once.
pub fn static_paths(directory: &TopicDirectory) -> Vec<String> {
    let mut paths = vec!["/learn".to_string()];

    for level in catalog::levels() {
        paths.push(format!("/learn/{}", level.id()));
        for board in catalog::boards_for_level(level.id()) {
            paths.push(format!("/learn/{}/{}", level.id(), board.id()));
        }
    }

    paths.extend(catalog::enumerate_all_combinations().iter().map(|c| {
        format!(
            "/learn/{}/{}/{}",
            c.level.id(),
            c.board.id(),
            c.subject.id()
        )
    }));

    paths.push(TOPIC_BROWSER.to_string());
    paths.extend(directory.static_params().iter().map(TopicRef::path));
    paths.push("/quiz".to_string());
    paths.push("/flashcards".to_string());

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biology::biology;

    #[test]
    fn parses_known_shapes() {
        assert_eq!(Route::parse("/learn"), Some(Route::Learn));
        assert_eq!(Route::parse("/learn/"), Some(Route::Learn));
        assert_eq!(
            Route::parse("/learn/gcse/aqa?tab=notes"),
            Some(Route::Board {
                level: "gcse",
                board: "aqa"
            })
        );
        assert_eq!(
            Route::parse("biology/chapter-3/inheritance#top"),
            Some(Route::Topic {
                chapter_id: "chapter-3",
                topic_id: "inheritance"
            })
        );
        assert_eq!(Route::parse("/biology/chapter-3"), None);
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/learn/a/b/c/d"), None);
        assert_eq!(Route::parse("/quiz"), Some(Route::Quiz { topic: None }));
        assert_eq!(
            Route::parse("/flashcards?shuffle=1&topic=chapter-3-inheritance#card"),
            Some(Route::Flashcards {
                topic: Some("chapter-3-inheritance")
            })
        );
    }

    #[test]
    fn practice_pages_take_a_topic_key() {
        let dir = biology();
        assert_eq!(
            resolve("/quiz?topic=chapter-2-nutrition", dir),
            Resolution::Quiz {
                questions: QUESTIONS.len(),
                topic: Some(TopicRef::new("chapter-2", "nutrition")),
            }
        );
        assert_eq!(
            resolve("/quiz", dir),
            Resolution::Quiz {
                questions: QUESTIONS.len(),
                topic: None,
            }
        );
        assert_eq!(
            resolve("/flashcards?topic=chapter-5-cloning", dir),
            Resolution::Flashcards {
                cards: FLASHCARDS.len(),
                topic: Some(TopicRef::new("chapter-5", "cloning")),
            }
        );
        assert!(resolve("/quiz?topic=chapter-1-nutrition", dir).is_not_found());
        assert!(resolve("/quiz?topic=", dir).is_not_found());
        assert!(resolve("/flashcards?topic=chapter-9-cloning", dir).is_not_found());
    }

    #[test]
    fn chapter_index_links_every_topic_for_each_content_type() {
        let dir = biology();
        let Resolution::ChapterIndex { chapters, .. } = resolve("/biology", dir) else {
            panic!("/biology is the chapter index");
        };

        let nutrition = chapters[1]
            .topics
            .iter()
            .find(|topic| topic.id == "nutrition")
            .unwrap();
        assert_eq!(nutrition.links.notes, "/biology/chapter-2/nutrition");
        assert_eq!(nutrition.links.questions, "/quiz?topic=chapter-2-nutrition");
        assert_eq!(
            nutrition.links.flashcards,
            "/flashcards?topic=chapter-2-nutrition"
        );

        for chapter in &chapters {
            for topic in &chapter.topics {
                for content_type in ContentType::ALL {
                    let link = topic.links.get(content_type);
                    assert!(!resolve(link, dir).is_not_found(), "{link}");
                }
            }
        }
    }

    #[test]
    fn redirect_only_for_igcse_edexcel_biology() {
        let redirected: Vec<_> = catalog::enumerate_all_combinations()
            .into_iter()
            .filter(|c| redirect_for(c).is_some())
            .collect();
        assert_eq!(
            redirected,
            vec![Combination {
                level: Level::Igcse,
                board: Board::Edexcel,
                subject: Subject::Biology,
            }]
        );
        assert_eq!(
            resolve("/learn/igcse/edexcel/biology", biology()),
            Resolution::Redirect {
                location: TOPIC_BROWSER
            }
        );
        assert!(matches!(
            resolve("/learn/gcse/edexcel/biology", biology()),
            Resolution::SubjectHub(_)
        ));
    }

    #[test]
    fn invalid_parameters_are_not_found() {
        let dir = biology();
        assert!(resolve("/learn/btec", dir).is_not_found());
        assert!(resolve("/learn/igcse/wjec", dir).is_not_found());
        assert!(resolve("/learn/igcse/wjec/biology", dir).is_not_found());
        assert!(resolve("/learn/gcse/wjec/history", dir).is_not_found());
        assert!(resolve("/biology/chapter-1/cloning", dir).is_not_found());
        assert!(resolve("/biology/chapter-6/cloning", dir).is_not_found());
    }

    #[test]
    fn topic_page_carries_neighbours() {
        match resolve("/biology/chapter-1/variety-living-organisms", biology()) {
            Resolution::TopicPage {
                position,
                of,
                previous,
                next,
                ..
            } => {
                assert_eq!((position, of), (2, 2));
                assert_eq!(
                    previous,
                    Some(TopicRef::new("chapter-1", "characteristics-living-organisms"))
                );
                assert_eq!(next, Some(TopicRef::new("chapter-2", "level-organisation")));
            }
            other => panic!("unexpected resolution {other:?}"),
        }
    }

    #[test]
    fn static_paths_are_unique_and_resolvable() {
        let dir = biology();
        let paths = static_paths(dir);
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());

        // learn index, 4 levels, 13 boards, 52 subject hubs, biology index,
        // 22 topics, quiz, flashcards
        assert_eq!(paths.len(), 1 + 4 + 13 + 52 + 1 + 22 + 2);

        for path in &paths {
            assert!(!resolve(path, dir).is_not_found(), "{path}");
        }
    }
}
