// Library surface for headless/integration tests and reuse.
// The binary only adds argument parsing and terminal setup on top.
pub mod app;
pub mod bank;
pub mod category;
pub mod config;
pub mod quiz;
pub mod runtime;
pub mod share;
pub mod ui;

pub use category::Category;
pub use quiz::{Progress, QuizError, QuizSession, QuizState};
