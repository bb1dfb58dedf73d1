use revhub::biology::{biology, TopicRef};
use revhub::catalog;
use revhub::route::{resolve, static_paths, Resolution};

#[test]
fn walks_the_whole_directory_forwards_and_back() {
    let dir = biology();
    let mut here = TopicRef::new("chapter-1", "characteristics-living-organisms");
    let mut visited = vec![here];

    while let Some(next) = dir.next_topic(here.chapter_id, here.topic_id) {
        visited.push(next);
        here = next;
    }
    assert_eq!(visited.len(), dir.total_topics());
    assert_eq!(here, TopicRef::new("chapter-5", "cloning"));

    let mut back = vec![here];
    while let Some(previous) = dir.previous_topic(here.chapter_id, here.topic_id) {
        back.push(previous);
        here = previous;
    }
    back.reverse();
    assert_eq!(back, visited);
    assert_eq!(visited, dir.static_params());
}

#[test]
fn every_subject_hub_is_generated() {
    let paths = static_paths(biology());
    for c in catalog::enumerate_all_combinations() {
        let path = format!("/learn/{}/{}/{}", c.level.id(), c.board.id(), c.subject.id());
        assert!(paths.contains(&path), "{path}");
    }
}

#[test]
fn resolutions_serialize_with_a_kind_tag() {
    let dir = biology();

    let json = serde_json::to_value(resolve("/learn/igcse/edexcel/biology", dir)).unwrap();
    assert_eq!(json["kind"], "redirect");
    assert_eq!(json["location"], "/biology");

    let json = serde_json::to_value(resolve("/learn/ib/hl/maths", dir)).unwrap();
    assert_eq!(json["kind"], "subject_hub");
    assert_eq!(json["level"], "ib");
    assert_eq!(json["board"], "hl");

    let json = serde_json::to_value(resolve("/biology/chapter-5/cloning", dir)).unwrap();
    assert_eq!(json["kind"], "topic_page");
    assert!(json["next"].is_null());
    assert_eq!(json["previous"]["topic_id"], "genetic-modification");

    let json = serde_json::to_value(resolve("/quiz?topic=chapter-2-nutrition", dir)).unwrap();
    assert_eq!(json["kind"], "quiz");
    assert_eq!(json["topic"]["chapter_id"], "chapter-2");
    assert_eq!(json["topic"]["topic_id"], "nutrition");

    let json = serde_json::to_value(resolve("/learn/ib/aqa", dir)).unwrap();
    assert_eq!(json["kind"], "not_found");
}

#[test]
fn chapter_index_lists_every_chapter() {
    match resolve("/biology", biology()) {
        Resolution::ChapterIndex {
            chapters,
            total_topics,
        } => {
            assert_eq!(chapters.len(), 5);
            assert_eq!(chapters[1].topics.len(), 10);
            assert_eq!(total_topics, 22);
        }
        other => panic!("unexpected resolution {other:?}"),
    }
}
