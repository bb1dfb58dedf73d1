use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::biology::TopicDirectory;
use crate::catalog::{self, Subject};
use crate::page::serialize_topic_page;
use crate::route::static_paths;

/// What a site build wrote.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SiteSummary {
    pub routes: usize,
    pub combinations: usize,
    pub topic_pages: usize,
}

#[derive(Serialize, Debug)]
struct CatalogManifest<'a> {
    levels: Vec<LevelManifest>,
    subjects: Vec<SubjectManifest>,
    combinations: Vec<catalog::Combination>,
    redirects: Vec<RedirectManifest<'a>>,
}

#[derive(Serialize, Debug)]
struct LevelManifest {
    id: &'static str,
    title: &'static str,
    boards: Vec<BoardManifest>,
}

#[derive(Serialize, Debug)]
struct BoardManifest {
    id: &'static str,
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize, Debug)]
struct SubjectManifest {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    topics: &'static [&'static str],
}

#[derive(Serialize, Debug)]
struct RedirectManifest<'a> {
    from: String,
    to: &'a str,
}

/// Writes every static artefact of the site under `output_dir`:
/// `routes.yaml`, `catalog.yaml` and one markdown page per biology topic.
///
/// An existing `output_dir` is only replaced when `clean` is set.
pub fn write_site(
    directory: &TopicDirectory,
    output_dir: &Path,
    clean: bool,
) -> anyhow::Result<SiteSummary> {
    create_output_dir(output_dir, clean).context("failed to create output directory")?;

    let routes = static_paths(directory);
    write_file(
        &output_dir.join("routes.yaml"),
        &serde_yaml_ng::to_string(&routes).context("failed to serialize routes")?,
    )?;
    log::info!("wrote {} routes", routes.len());

    let manifest = catalog_manifest();
    let combinations = manifest.combinations.len();
    write_file(
        &output_dir.join("catalog.yaml"),
        &serde_yaml_ng::to_string(&manifest).context("failed to serialize catalog")?,
    )?;
    log::info!("wrote catalog with {} combinations", combinations);

    let mut topic_pages = 0;
    for chapter in directory.chapters() {
        let chapter_dir = output_dir.join("biology").join(&chapter.id);
        fs::create_dir_all(&chapter_dir)
            .context(format!("failed to create directory for {}", chapter.id))?;

        for topic in &chapter.topics {
            let content = serialize_topic_page(directory, &chapter.id, &topic.id)
                .context(format!("failed to serialize page {}/{}", chapter.id, topic.id))?;
            write_file(&chapter_dir.join(format!("{}.md", topic.id)), &content)?;
            log::debug!("wrote page {}/{}", chapter.id, topic.id);
            topic_pages += 1;
        }
    }

    Ok(SiteSummary {
        routes: routes.len(),
        combinations,
        topic_pages,
    })
}

fn catalog_manifest() -> CatalogManifest<'static> {
    let combinations = catalog::enumerate_all_combinations();
    let redirects = combinations
        .iter()
        .filter_map(|c| {
            crate::route::redirect_for(c).map(|to| RedirectManifest {
                from: format!("/learn/{}/{}/{}", c.level.id(), c.board.id(), c.subject.id()),
                to,
            })
        })
        .collect();

    CatalogManifest {
        levels: catalog::levels()
            .map(|level| LevelManifest {
                id: level.id(),
                title: level.title(),
                boards: catalog::offerings_for_level(level.id())
                    .iter()
                    .map(|offering| BoardManifest {
                        id: offering.board.id(),
                        title: offering.board.title(),
                        description: offering.description,
                    })
                    .collect(),
            })
            .collect(),
        subjects: Subject::ALL
            .into_iter()
            .map(|subject| SubjectManifest {
                id: subject.id(),
                title: subject.title(),
                description: subject.description(),
                topics: subject.topics(),
            })
            .collect(),
        combinations,
        redirects,
    }
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .context(format!("failed to open file {}", path.display()))?;
    write!(file, "{}", content).context(format!("failed to write {}", path.display()))?;
    Ok(())
}

fn create_output_dir(output_dir: &Path, clean: bool) -> anyhow::Result<()> {
    if fs::metadata(output_dir).is_ok() {
        if !clean {
            anyhow::bail!(
                "{} already exists, pass --clean to replace it",
                output_dir.display()
            );
        }
        fs::remove_dir_all(output_dir)?;
    }

    fs::create_dir_all(output_dir)?;
    Ok(())
}
