use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Flashcard {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const FLASHCARDS: &[Flashcard] = &[
    Flashcard {
        id: 1,
        question: "What is photosynthesis?",
        answer: "The process by which green plants and some other organisms use sunlight to synthesize nutrients from carbon dioxide and water. It produces glucose and oxygen as byproducts.",
        category: "Biology",
    },
    Flashcard {
        id: 2,
        question: "What is the Pythagorean theorem?",
        answer: "In a right triangle, the square of the length of the hypotenuse equals the sum of squares of the lengths of the other two sides. Formula: a² + b² = c²",
        category: "Mathematics",
    },
    Flashcard {
        id: 3,
        question: "What are the three states of matter?",
        answer: "Solid, liquid, and gas. These states differ in how tightly packed the molecules are and how much they move. Plasma is considered a fourth state.",
        category: "Physics",
    },
    Flashcard {
        id: 4,
        question: "What is the water cycle?",
        answer: "The continuous movement of water on, above, and below Earth's surface through evaporation, condensation, precipitation, and collection processes.",
        category: "Earth Science",
    },
    Flashcard {
        id: 5,
        question: "What is DNA?",
        answer: "Deoxyribonucleic acid - the hereditary material in humans and almost all other organisms. It carries genetic instructions for development, functioning, and reproduction.",
        category: "Biology",
    },
    Flashcard {
        id: 6,
        question: "What is gravity?",
        answer: "A fundamental force that attracts objects with mass toward each other. On Earth, it gives weight to physical objects and causes them to fall toward the ground.",
        category: "Physics",
    },
    Flashcard {
        id: 7,
        question: "What is the periodic table?",
        answer: "A tabular arrangement of chemical elements organized by atomic number, electron configuration, and recurring chemical properties. It shows periodic trends.",
        category: "Chemistry",
    },
    Flashcard {
        id: 8,
        question: "What is evolution?",
        answer: "The change in heritable traits of biological populations over successive generations. It occurs through natural selection, genetic drift, and other mechanisms.",
        category: "Biology",
    },
];

/// Flip-card viewer over a fixed set of cards. Moving between cards wraps
/// around at both ends and always shows the question side first.
#[derive(Debug)]
pub struct FlashcardDeck<'c> {
    cards: &'c [Flashcard],
    order: Vec<usize>,
    current: usize,
    flipped: bool,
}

impl Default for FlashcardDeck<'static> {
    fn default() -> Self {
        Self::new(FLASHCARDS)
    }
}

impl<'c> FlashcardDeck<'c> {
    pub fn new(cards: &'c [Flashcard]) -> Self {
        Self {
            cards,
            order: (0..cards.len()).collect(),
            current: 0,
            flipped: false,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn current(&self) -> Option<&'c Flashcard> {
        let cards = self.cards;
        self.order.get(self.current).map(|&i| &cards[i])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next_card(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.len();
        self.flipped = false;
    }

    pub fn previous_card(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = (self.current + self.len() - 1) % self.len();
        self.flipped = false;
    }

    pub fn shuffle(&mut self) {
        self.order.sort_by_cached_key(|_| Uuid::new_v4());
        self.current = 0;
        self.flipped = false;
        log::debug!("shuffled {} flashcards", self.order.len());
    }

    /// Restores the original card order.
    pub fn reset(&mut self) {
        self.order = (0..self.cards.len()).collect();
        self.current = 0;
        self.flipped = false;
    }

    /// Cards in their current viewing order.
    pub fn cards(&self) -> impl Iterator<Item = &'c Flashcard> + '_ {
        let cards = self.cards;
        self.order.iter().map(move |&i| &cards[i])
    }
}
