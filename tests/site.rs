use std::fs;

use revhub::biology::biology;
use revhub::site::{write_site, SiteSummary};

#[test]
fn writes_every_static_artefact() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("site");

    let summary = write_site(biology(), &out, false).unwrap();
    assert_eq!(
        summary,
        SiteSummary {
            routes: 95,
            combinations: 52,
            topic_pages: 22,
        }
    );

    let routes: Vec<String> =
        serde_yaml_ng::from_str(&fs::read_to_string(out.join("routes.yaml")).unwrap()).unwrap();
    assert_eq!(routes.len(), 95);
    assert!(routes.contains(&"/biology/chapter-4/cycles-ecosystems".to_string()));
    assert!(routes.contains(&"/learn/gcse/wjec/maths".to_string()));

    let catalog = fs::read_to_string(out.join("catalog.yaml")).unwrap();
    assert!(catalog.contains("Welsh Joint Education Committee"));
    assert!(catalog.contains("from: /learn/igcse/edexcel/biology"));

    let page = fs::read_to_string(out.join("biology/chapter-3/reproduction.md")).unwrap();
    assert!(page.contains("title: Reproduction"));
    assert!(page.contains("href: /biology/chapter-3/inheritance"));
    assert!(page.contains("href: /biology/chapter-2/coordination-response"));
}

#[test]
fn refuses_to_overwrite_without_clean() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("site");

    write_site(biology(), &out, false).unwrap();
    assert!(write_site(biology(), &out, false).is_err());

    fs::write(out.join("stale.txt"), "old").unwrap();
    write_site(biology(), &out, true).unwrap();
    assert!(!out.join("stale.txt").exists());
    assert!(out.join("biology/chapter-5/cloning.md").exists());
}
