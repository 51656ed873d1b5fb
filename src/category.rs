use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz::QuizError;

/// One of the five animal outcomes of the quiz.
///
/// Declaration order is the canonical order used to break scoring ties,
/// see [`Category::ALL`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Cat,
    Dog,
    Fox,
    Hamster,
    Horse,
}

impl Category {
    /// Canonical category order. The first entry wins a tie.
    pub const ALL: [Category; 5] = [
        Category::Cat,
        Category::Dog,
        Category::Fox,
        Category::Hamster,
        Category::Horse,
    ];

    /// Image resource shown next to a result
    pub fn image_path(&self) -> &'static str {
        match self {
            Category::Cat => "/cat.png",
            Category::Dog => "/dog.png",
            Category::Fox => "/fox.png",
            Category::Hamster => "/hamster.png",
            Category::Horse => "/horse.png",
        }
    }

    /// Position in the canonical order
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuizError::UnknownCategory(s.to_string()))
    }
}
