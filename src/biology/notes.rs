use serde::Serialize;

use super::chapter::Topic;

/// Study notes shown on a topic page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TopicNotes {
    pub introduction: String,
    pub key_points: Vec<String>,
    pub examples: Vec<String>,
}

impl TopicNotes {
    fn from_static(introduction: &str, key_points: &[&str], examples: &[&str]) -> Self {
        Self {
            introduction: introduction.to_string(),
            key_points: key_points.iter().map(|p| p.to_string()).collect(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Authored notes where they exist, generic notes built from the title otherwise.
pub fn notes_for(topic: &Topic) -> TopicNotes {
    match topic.id.as_str() {
        "characteristics-living-organisms" => TopicNotes::from_static(
            "All living organisms share certain fundamental characteristics that distinguish them from non-living matter. These characteristics are essential for life and are observed across all forms of life on Earth.",
            &[
                "Movement - the ability to change position or move parts of the body",
                "Respiration - the chemical process that releases energy from food",
                "Sensitivity - the ability to detect and respond to changes in the environment",
                "Growth - the permanent increase in size and complexity",
                "Reproduction - the ability to produce offspring",
                "Excretion - the removal of waste products from the body",
                "Nutrition - the process of obtaining and using food for energy and growth",
            ],
            &[
                "Plants show movement by growing towards light (phototropism)",
                "Animals breathe to obtain oxygen for respiration",
                "Bacteria reproduce by binary fission",
                "Mammals excrete waste through kidneys and lungs",
            ],
        ),
        "variety-living-organisms" => TopicNotes::from_static(
            "Life on Earth exists in an incredible variety of forms, from microscopic bacteria to massive whales. This diversity is the result of millions of years of evolution and adaptation to different environments.",
            &[
                "Kingdom classification system organizes life into major groups",
                "Bacteria are single-celled prokaryotic organisms",
                "Plants are multicellular organisms that photosynthesize",
                "Animals are multicellular organisms that consume other organisms",
                "Fungi decompose organic matter and absorb nutrients",
            ],
            &[
                "Bacteria: E. coli, Streptococcus",
                "Plants: Oak trees, grass, algae",
                "Animals: Humans, insects, fish",
                "Fungi: Mushrooms, yeast, mold",
            ],
        ),
        _ => generic_notes(&topic.title),
    }
}

fn generic_notes(title: &str) -> TopicNotes {
    let mut notes = TopicNotes::from_static(
        "",
        &[
            "Key concepts and principles will be covered",
            "Real-world examples and applications",
            "Important terminology and definitions",
            "Connections to other biological topics",
        ],
        &[
            "Practical examples from nature",
            "Laboratory observations",
            "Case studies and research findings",
        ],
    );
    notes.introduction = format!(
        "This section covers {}, an important concept in biology that helps us understand living organisms and their processes.",
        title.to_lowercase()
    );
    notes
}
