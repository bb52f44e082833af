use crate::catalog::LevelId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid level catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Unknown level id: {id}")]
    UnknownLevel { id: LevelId },

    #[error("Assessment requires at least one answer")]
    EmptyAnswers,

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Answer {answer} is not an option of question `{question_id}`")]
    InvalidAnswer {
        question_id: String,
        answer: LevelId,
    },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Invalid page URL for sharing: {message}")]
    InvalidShareUrl { message: String },

    #[error("Storage I/O error for key `{key}`: {source}")]
    StorageIo {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
