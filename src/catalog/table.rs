use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Igcse,
    Gcse,
    ALevel,
    Ib,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Igcse, Level::Gcse, Level::ALevel, Level::Ib];

    pub fn id(self) -> &'static str {
        match self {
            Level::Igcse => "igcse",
            Level::Gcse => "gcse",
            Level::ALevel => "a-level",
            Level::Ib => "ib",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Igcse => "iGCSE",
            Level::Gcse => "GCSE",
            Level::ALevel => "A-Level",
            Level::Ib => "IB",
        }
    }

    pub fn from_id(id: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.id() == id)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Board {
    Aqa,
    Edexcel,
    Cambridge,
    Ocr,
    Wjec,
    Sl,
    Hl,
}

impl Board {
    pub const ALL: [Board; 7] = [
        Board::Aqa,
        Board::Edexcel,
        Board::Cambridge,
        Board::Ocr,
        Board::Wjec,
        Board::Sl,
        Board::Hl,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Board::Aqa => "aqa",
            Board::Edexcel => "edexcel",
            Board::Cambridge => "cambridge",
            Board::Ocr => "ocr",
            Board::Wjec => "wjec",
            Board::Sl => "sl",
            Board::Hl => "hl",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Board::Aqa => "AQA",
            Board::Edexcel => "Edexcel",
            Board::Cambridge => "Cambridge (CIE)",
            Board::Ocr => "OCR",
            Board::Wjec => "WJEC",
            Board::Sl => "SL (Standard Level)",
            Board::Hl => "HL (Higher Level)",
        }
    }

    pub fn from_id(id: &str) -> Option<Board> {
        Board::ALL.into_iter().find(|board| board.id() == id)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Biology,
    Chemistry,
    Physics,
    Maths,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::Maths,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Subject::Biology => "biology",
            Subject::Chemistry => "chemistry",
            Subject::Physics => "physics",
            Subject::Maths => "maths",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Subject::Biology => "Biology",
            Subject::Chemistry => "Chemistry",
            Subject::Physics => "Physics",
            Subject::Maths => "Mathematics",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Subject::Biology => "Explore the fascinating world of living organisms, from molecular biology to ecosystems.",
            Subject::Chemistry => "Discover the science of matter, chemical reactions, and molecular interactions.",
            Subject::Physics => "Understand the fundamental laws governing matter, energy, and the universe.",
            Subject::Maths => "Master mathematical concepts, problem-solving techniques, and analytical thinking.",
        }
    }

    /// headline topics shown on the subject hub
    pub fn topics(self) -> &'static [&'static str] {
        match self {
            Subject::Biology => &[
                "Cell Structure and Function",
                "Genetics and Heredity",
                "Evolution and Natural Selection",
                "Human Biology and Health",
                "Ecology and Environment",
                "Plant Biology and Photosynthesis",
            ],
            Subject::Chemistry => &[
                "Atomic Structure and Bonding",
                "Chemical Reactions and Equations",
                "Organic Chemistry",
                "Physical Chemistry",
                "Analytical Chemistry",
                "Industrial Chemistry",
            ],
            Subject::Physics => &[
                "Mechanics and Motion",
                "Electricity and Magnetism",
                "Waves and Optics",
                "Thermodynamics",
                "Modern Physics",
                "Astrophysics",
            ],
            Subject::Maths => &[
                "Algebra and Functions",
                "Calculus and Analysis",
                "Statistics and Probability",
                "Geometry and Trigonometry",
                "Number Theory",
                "Applied Mathematics",
            ],
        }
    }

    pub fn from_id(id: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|subject| subject.id() == id)
    }
}

/// A board as offered under one level. The description differs per level
/// (Pearson Edexcel vs. Pearson Edexcel International).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOffering {
    pub board: Board,
    pub description: &'static str,
}

#[derive(Debug)]
pub(super) struct LevelEntry {
    pub(super) level: Level,
    pub(super) boards: &'static [BoardOffering],
}

const AQA: BoardOffering = BoardOffering {
    board: Board::Aqa,
    description: "Assessment and Qualifications Alliance",
};
const CAMBRIDGE: BoardOffering = BoardOffering {
    board: Board::Cambridge,
    description: "Cambridge Assessment International Education",
};
const OCR: BoardOffering = BoardOffering {
    board: Board::Ocr,
    description: "Oxford Cambridge and RSA Examinations",
};
const EDEXCEL: BoardOffering = BoardOffering {
    board: Board::Edexcel,
    description: "Pearson Edexcel",
};

pub(super) const COMPATIBILITY: &[LevelEntry] = &[
    LevelEntry {
        level: Level::Igcse,
        boards: &[
            AQA,
            BoardOffering {
                board: Board::Edexcel,
                description: "Pearson Edexcel International",
            },
            CAMBRIDGE,
        ],
    },
    LevelEntry {
        level: Level::Gcse,
        boards: &[
            AQA,
            EDEXCEL,
            OCR,
            BoardOffering {
                board: Board::Wjec,
                description: "Welsh Joint Education Committee",
            },
        ],
    },
    LevelEntry {
        level: Level::ALevel,
        boards: &[AQA, EDEXCEL, CAMBRIDGE, OCR],
    },
    LevelEntry {
        level: Level::Ib,
        boards: &[
            BoardOffering {
                board: Board::Sl,
                description: "Standard Level International Baccalaureate",
            },
            BoardOffering {
                board: Board::Hl,
                description: "Higher Level International Baccalaureate",
            },
        ],
    },
];
