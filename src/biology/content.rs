use super::chapter::{Chapter, Topic};

struct ChapterSource {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    topics: &'static [(&'static str, &'static str)],
}

// Titles are copy-edited ("Biological molecules", "into and out of cells");
// ids are kept as published so existing links stay valid.
const BIOLOGY: &[ChapterSource] = &[
    ChapterSource {
        id: "chapter-1",
        title: "The nature and variety of living organisms",
        description: "Understanding the fundamental characteristics that define life and exploring the incredible diversity of living organisms on Earth.",
        topics: &[
            ("characteristics-living-organisms", "Characteristics of living organisms"),
            ("variety-living-organisms", "Variety of living organisms"),
        ],
    },
    ChapterSource {
        id: "chapter-2",
        title: "Structure and functions in living organisms",
        description: "Examining the organization of life from cellular level to complex organ systems and understanding how structure relates to function.",
        topics: &[
            ("level-organisation", "Level of organisation"),
            ("cell-structure", "Cell structure"),
            ("biological-molecules", "Biological molecules"),
            ("movement-substances", "Movement of substances into and out of cells"),
            ("nutrition", "Nutrition"),
            ("respiration", "Respiration"),
            ("gas-exchange", "Gas exchange"),
            ("transport", "Transport"),
            ("excretion", "Excretion"),
            ("coordination-response", "Coordination and response"),
        ],
    },
    ChapterSource {
        id: "chapter-3",
        title: "Reproduction & Inheritance",
        description: "Exploring how organisms reproduce and pass genetic information to their offspring, including the mechanisms of heredity.",
        topics: &[
            ("reproduction", "Reproduction"),
            ("inheritance", "Inheritance"),
        ],
    },
    ChapterSource {
        id: "chapter-4",
        title: "Ecology and the Environment",
        description: "Understanding the relationships between organisms and their environment, including ecosystem dynamics and human impact.",
        topics: &[
            ("organism-environment", "The organism in the environment"),
            ("feeding-relationships", "Feeding Relationships"),
            ("cycles-ecosystems", "Cycles within ecosystems"),
            ("human-influences-environment", "Human influences on the environment"),
        ],
    },
    ChapterSource {
        id: "chapter-5",
        title: "Use of Biological Resources",
        description: "Examining how humans utilize biological resources and the technologies involved in food production and genetic manipulation.",
        topics: &[
            ("food-production", "Food production"),
            ("selective-breeding", "Selective breeding"),
            ("genetic-modification", "Genetic modification (genetic engineering)"),
            ("cloning", "Cloning"),
        ],
    },
];

/// The iGCSE Edexcel biology syllabus, chapter by chapter.
pub(super) fn biology_chapters() -> Vec<Chapter> {
    BIOLOGY
        .iter()
        .map(|source| {
            Chapter::new(
                source.id,
                source.title,
                source.description,
                source
                    .topics
                    .iter()
                    .map(|(id, title)| Topic::new(*id, *title))
                    .collect(),
            )
        })
        .collect()
}
