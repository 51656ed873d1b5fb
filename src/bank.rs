use crate::category::Category;

/// A selectable answer, tagged with the category it votes for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub category: Category,
    pub text: &'static str,
}

impl AnswerOption {
    pub const fn new(category: Category, text: &'static str) -> Self {
        Self { category, text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(prompt: &'static str, options: &[AnswerOption]) -> Self {
        Self {
            prompt,
            options: options.to_vec(),
        }
    }
}

use Category::*;

static BANK: [(&str, [AnswerOption; 5]); 5] = [
    (
        "What's your favorite type of environment?",
        [
            AnswerOption::new(Cat, "Quiet, cozy rooms"),
            AnswerOption::new(Dog, "Open parks and trails"),
            AnswerOption::new(Fox, "Wooded, mysterious places"),
            AnswerOption::new(Hamster, "Small, contained spaces"),
            AnswerOption::new(Horse, "Wide, open fields"),
        ],
    ),
    (
        "How do you prefer to spend your free time?",
        [
            AnswerOption::new(Cat, "Reading or napping"),
            AnswerOption::new(Dog, "Playing fetch or going for walks"),
            AnswerOption::new(Fox, "Exploring new places"),
            AnswerOption::new(Hamster, "Running on a wheel or hiding in tunnels"),
            AnswerOption::new(Horse, "Riding or training"),
        ],
    ),
    (
        "What's your ideal companion?",
        [
            AnswerOption::new(Cat, "Someone who respects my space"),
            AnswerOption::new(Dog, "Someone who loves to play"),
            AnswerOption::new(Fox, "Someone curious and clever"),
            AnswerOption::new(Hamster, "Someone who enjoys small adventures"),
            AnswerOption::new(Horse, "Someone who loves the outdoors"),
        ],
    ),
    (
        "How do you react to new people?",
        [
            AnswerOption::new(Cat, "I observe before I engage"),
            AnswerOption::new(Dog, "I greet them enthusiastically"),
            AnswerOption::new(Fox, "I'm cautious but intrigued"),
            AnswerOption::new(Hamster, "I'm shy and prefer familiar faces"),
            AnswerOption::new(Horse, "I'm friendly but keep my distance"),
        ],
    ),
    (
        "What's your favorite snack?",
        [
            AnswerOption::new(Cat, "Fish or dry kibble"),
            AnswerOption::new(Dog, "Meat or crunchy treats"),
            AnswerOption::new(Fox, "Fresh fruit or nuts"),
            AnswerOption::new(Hamster, "Seeds or grains"),
            AnswerOption::new(Horse, "Hay or oats"),
        ],
    ),
];

/// The fixed question bank, in presentation order
pub fn question_bank() -> Vec<Question> {
    BANK.iter()
        .map(|(prompt, options)| Question::new(*prompt, options))
        .collect()
}
