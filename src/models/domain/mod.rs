pub mod quiz_question;
pub mod quiz_result;
pub mod source_content;
pub use quiz_question::{AnswerKey, Choices, QuizQuestion};
pub use quiz_result::QuizResult;
pub use source_content::{ExtractedText, SourceContent, Summary};
