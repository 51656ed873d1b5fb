use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info, warn};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::bank::{question_bank, Question};
use crate::category::Category;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is already completed, retake to start over")]
    AlreadyCompleted,

    #[error("no option #{index} on this question ({len} available)")]
    NoSuchOption { index: usize, len: usize },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Completed,
}

/// What an accepted answer led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to the question at this index
    Next(usize),
    Completed(Category),
}

/// One run through the quiz. Owned by whatever renders it and replaced
/// wholesale on retake.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    selections: Vec<Category>,
    result: Option<Category>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_bank(&question_bank(), rng)
    }

    /// Copies `bank` and shuffles the options of every question independently.
    /// Question order is kept.
    pub fn from_bank<R: Rng + ?Sized>(bank: &[Question], rng: &mut R) -> Self {
        let questions = bank
            .iter()
            .map(|q| {
                let mut options = q.options.clone();
                options.shuffle(rng);
                Question {
                    prompt: q.prompt,
                    options,
                }
            })
            .collect();

        Self {
            questions,
            selections: Vec::new(),
            result: None,
        }
    }

    /// Records `category` for the current question. The category is not checked
    /// against the options on offer, use [`QuizSession::choose`] for that.
    pub fn answer(&mut self, category: Category) -> Result<Progress, QuizError> {
        if self.is_completed() || self.current_index() >= self.len() {
            warn!("answer({category}) rejected: no question left to answer");
            return Err(QuizError::AlreadyCompleted);
        }

        self.selections.push(category);
        debug!(
            "answered {}/{} with {}",
            self.selections.len(),
            self.questions.len(),
            category
        );

        if self.selections.len() == self.questions.len() {
            let result = winner(&self.selections);
            self.result = Some(result);
            info!("quiz completed: {result} (selections: {:?})", self.selections);
            Ok(Progress::Completed(result))
        } else {
            Ok(Progress::Next(self.current_index()))
        }
    }

    /// Answers with the option at `index` of the current question's shuffled list
    pub fn choose(&mut self, index: usize) -> Result<Progress, QuizError> {
        let question = self.current_question()?;
        let option = question.options.get(index).copied().ok_or_else(|| {
            warn!("choose({index}) rejected: out of range");
            QuizError::NoSuchOption {
                index,
                len: question.options.len(),
            }
        })?;
        self.answer(option.category)
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if self.is_completed() {
            return Err(QuizError::AlreadyCompleted);
        }
        self.questions
            .get(self.current_index())
            .ok_or(QuizError::AlreadyCompleted)
    }

    /// A brand-new session over the same questions, with a fresh shuffle.
    /// Progress is not carried over; the caller replaces its session with the returned one.
    pub fn retake(&self) -> Self {
        self.retake_with_rng(&mut rand::thread_rng())
    }

    pub fn retake_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        info!("retaking quiz");
        Self::from_bank(&self.questions, rng)
    }

    pub fn state(&self) -> QuizState {
        if self.result.is_some() {
            QuizState::Completed
        } else {
            QuizState::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == QuizState::Completed
    }

    /// Index of the question being asked. Equals [`QuizSession::len`] once completed.
    pub fn current_index(&self) -> usize {
        self.selections.len()
    }

    /// 1-based number of the question on screen, capped at the question count
    pub fn question_number(&self) -> usize {
        (self.current_index() + 1).min(self.len())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selections(&self) -> &[Category] {
        &self.selections
    }

    pub fn result(&self) -> Option<Category> {
        self.result
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts every category in `selections`, starting all five at zero.
/// Returned in canonical order.
pub fn tally(selections: &[Category]) -> [(Category, usize); 5] {
    let counts: HashMap<Category, usize> = selections.iter().copied().counts();
    Category::ALL.map(|c| (c, counts.get(&c).copied().unwrap_or(0)))
}

/// Highest count wins; ties go to the category that comes first in [`Category::ALL`].
pub fn winner(selections: &[Category]) -> Category {
    let counts = tally(selections);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    counts
        .iter()
        .find(|(_, n)| *n == max)
        .map(|(c, _)| *c)
        .unwrap_or(Category::ALL[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::AnswerOption;
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};
    use Category::*;

    fn seeded(seed: u64) -> QuizSession {
        QuizSession::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn assert_invariants(session: &QuizSession) {
        if session.result().is_none() {
            assert_eq!(session.selections().len(), session.current_index());
            assert!(session.current_index() < session.len());
        } else {
            assert_eq!(session.current_index(), session.len());
        }
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let session = seeded(1);
        assert_eq!(session.current_index(), 0);
        assert!(session.selections().is_empty());
        assert_eq!(session.result(), None);
        assert_eq!(session.state(), QuizState::InProgress);
        assert_eq!(session.len(), 5);
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_shuffle_keeps_prompts_and_pairs() {
        let bank = question_bank();
        for seed in 0..20 {
            let session = seeded(seed);
            for (original, shuffled) in bank.iter().zip(session.questions()) {
                assert_eq!(original.prompt, shuffled.prompt);
                assert_eq!(original.options.len(), shuffled.options.len());
                let mut a = original.options.clone();
                let mut b = shuffled.options.clone();
                a.sort_by_key(|o| o.category);
                b.sort_by_key(|o| o.category);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_shuffle_changes_option_order_across_sessions() {
        let orders: std::collections::HashSet<Vec<Category>> = (0..20)
            .map(|seed| {
                seeded(seed).questions()[0]
                    .options
                    .iter()
                    .map(|o| o.category)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_answer_advances_until_last_question() {
        let mut session = seeded(2);
        for expected in 1..5 {
            assert_eq!(session.answer(Dog), Ok(Progress::Next(expected)));
            assert_invariants(&session);
            assert_eq!(session.state(), QuizState::InProgress);
        }
        assert_eq!(session.answer(Cat), Ok(Progress::Completed(Dog)));
        assert_eq!(session.state(), QuizState::Completed);
        assert_invariants(&session);
    }

    #[test]
    fn test_completes_exactly_once_on_final_answer() {
        let mut session = seeded(3);
        let mut completions = 0;
        for category in [Cat, Dog, Fox, Hamster, Horse] {
            if let Ok(Progress::Completed(_)) = session.answer(category) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(session.result(), Some(Cat));
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let mut session = seeded(4);
        for _ in 0..5 {
            session.answer(Fox).unwrap();
        }
        let before = session.selections().to_vec();

        assert_matches!(session.answer(Horse), Err(QuizError::AlreadyCompleted));
        assert_matches!(session.choose(0), Err(QuizError::AlreadyCompleted));
        assert_matches!(session.current_question(), Err(QuizError::AlreadyCompleted));
        assert_eq!(session.selections(), before.as_slice());
        assert_eq!(session.result(), Some(Fox));
    }

    #[test]
    fn test_answer_accepts_category_not_on_offer() {
        let bank = vec![Question::new(
            "only cats?",
            &[AnswerOption::new(Cat, "yes")],
        )];
        let mut session = QuizSession::from_bank(&bank, &mut StdRng::seed_from_u64(0));
        assert_eq!(session.answer(Horse), Ok(Progress::Completed(Horse)));
    }

    #[test]
    fn test_choose_uses_shuffled_option() {
        let mut session = seeded(5);
        let picked = session.current_question().unwrap().options[3].category;
        session.choose(3).unwrap();
        assert_eq!(session.selections(), &[picked]);
    }

    #[test]
    fn test_choose_out_of_range_leaves_state_untouched() {
        let mut session = seeded(6);
        assert_eq!(
            session.choose(5),
            Err(QuizError::NoSuchOption { index: 5, len: 5 })
        );
        assert_eq!(session.current_index(), 0);
        assert!(session.selections().is_empty());
    }

    #[test]
    fn test_current_question_follows_index() {
        let mut session = seeded(7);
        for idx in 0..5 {
            let prompt = session.current_question().unwrap().prompt;
            assert_eq!(prompt, session.questions()[idx].prompt);
            session.choose(0).unwrap();
        }
    }

    #[test]
    fn test_retake_resets_progress() {
        let mut session = seeded(8);
        for _ in 0..5 {
            session.answer(Hamster).unwrap();
        }
        let session = session.retake_with_rng(&mut StdRng::seed_from_u64(9));
        assert_eq!(session.current_index(), 0);
        assert!(session.selections().is_empty());
        assert_eq!(session.result(), None);
        assert_eq!(session.state(), QuizState::InProgress);

        let session = session.retake();
        assert_eq!(session.len(), 5);
    }

    #[test]
    fn test_retake_reshuffles_options() {
        let mut rng = StdRng::seed_from_u64(21);
        let first = QuizSession::with_rng(&mut rng);
        let second = first.retake_with_rng(&mut rng);

        let orders = |s: &QuizSession| -> Vec<Vec<Category>> {
            s.questions()
                .iter()
                .map(|q| q.options.iter().map(|o| o.category).collect())
                .collect()
        };
        assert_ne!(orders(&first), orders(&second));
        for (a, b) in first.questions().iter().zip(second.questions()) {
            assert_eq!(a.prompt, b.prompt);
        }
    }

    #[test]
    fn test_retake_keeps_custom_bank() {
        let bank = vec![Question::new(
            "dog or fox?",
            &[AnswerOption::new(Dog, "dog"), AnswerOption::new(Fox, "fox")],
        )];
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::from_bank(&bank, &mut rng);
        session.answer(Fox).unwrap();

        let session = session.retake_with_rng(&mut rng);
        assert_eq!(session.len(), 1);
        assert_eq!(session.questions()[0].prompt, "dog or fox?");
        assert_eq!(session.state(), QuizState::InProgress);
        assert!(session.selections().is_empty());
    }

    #[test]
    fn test_empty_bank_rejects_answers() {
        let mut session = QuizSession::from_bank(&[], &mut StdRng::seed_from_u64(0));
        assert!(session.is_empty());
        assert_matches!(session.answer(Cat), Err(QuizError::AlreadyCompleted));
        assert_matches!(session.choose(0), Err(QuizError::AlreadyCompleted));
        assert_eq!(session.current_index(), 0);
        assert!(session.selections().is_empty());
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_tie_between_two_goes_to_canonical_first() {
        assert_eq!(winner(&[Cat, Dog]), Cat);
        assert_eq!(winner(&[Dog, Cat]), Cat);
        assert_eq!(winner(&[Horse, Fox]), Fox);
    }

    #[test]
    fn test_plain_majority_wins() {
        assert_eq!(winner(&[Dog, Dog, Cat, Fox, Horse]), Dog);
        assert_eq!(winner(&[Horse, Horse, Horse, Cat, Cat]), Horse);
    }

    #[test]
    fn test_five_way_tie_goes_to_cat() {
        assert_eq!(winner(&[Horse, Hamster, Fox, Dog, Cat]), Cat);
        assert_eq!(winner(&[]), Cat);
    }

    #[test]
    fn test_winner_ignores_answer_order() {
        let selections = [Fox, Hamster, Hamster, Fox, Dog];
        let mut reversed = selections;
        reversed.reverse();
        assert_eq!(winner(&selections), winner(&reversed));
        assert_eq!(winner(&selections), Fox);
    }

    #[test]
    fn test_tally_counts_all_categories() {
        let counts = tally(&[Dog, Dog, Horse]);
        assert_eq!(
            counts,
            [(Cat, 0), (Dog, 2), (Fox, 0), (Hamster, 0), (Horse, 1)]
        );
    }

    #[test]
    fn test_session_result_matches_winner() {
        let mut session = seeded(10);
        let picks = [Dog, Dog, Cat, Fox, Horse];
        for p in picks {
            session.answer(p).unwrap();
        }
        assert_eq!(session.result(), Some(winner(&picks)));
        assert_eq!(session.result(), Some(Dog));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuizError::NoSuchOption { index: 7, len: 5 }.to_string(),
            "no option #7 on this question (5 available)"
        );
        assert_eq!(
            QuizError::UnknownCategory("owl".into()).to_string(),
            "unknown category `owl`"
        );
    }
}
