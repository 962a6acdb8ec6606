use common::error::AppError;

pub const MISSING_QUESTION_MESSAGE: &str = "Please provide a message.";
pub const CORPUS_UNAVAILABLE_MESSAGE: &str = "Book content not loaded. Cannot answer questions.";
pub const FAILURE_PREFIX: &str = "An error occurred while processing your request:";

/// Result of handling one question.
#[derive(Debug)]
pub enum AnswerOutcome {
    Answered(String),
    MissingQuestion,
    CorpusUnavailable,
    Failed(AppError),
}

impl AnswerOutcome {
    /// The text shown to the user for this outcome.
    pub fn into_response_text(self) -> String {
        match self {
            Self::Answered(answer) => answer,
            Self::MissingQuestion => MISSING_QUESTION_MESSAGE.to_string(),
            Self::CorpusUnavailable => CORPUS_UNAVAILABLE_MESSAGE.to_string(),
            Self::Failed(err) => failure_message(&err),
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

pub fn failure_message(err: &AppError) -> String {
    format!("{FAILURE_PREFIX} {err}")
}
