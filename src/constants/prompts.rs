use once_cell::sync::Lazy;

use crate::models::domain::QuizQuestion;

pub const SUMMARIZER_SYSTEM_PROMPT: &str = "You are a concise summarization assistant.";

pub const QUESTION_GENERATOR_SYSTEM_PROMPT: &str = "You produce strictly JSON.";

pub const MARKDOWN_SYSTEM_PROMPT: &str = "You are an expert technical writer specializing in converting documents to clean, well-structured Notion-style markdown. Focus on readability, proper formatting, and logical organization.";

pub const JSON_ONLY_INSTRUCTION: &str =
    "Output must be a valid JSON array ONLY (no extra commentary).";

const QUESTION_EXAMPLE: &str = r#"[
  {"id":1,"question":"...","choices":{"A":"..","B":"..","C":"..","D":".."},"answer":"B","explanation":"..."},
  ...
]"#;

const MARKDOWN_GUIDELINES: &str = "FORMATTING GUIDELINES:
- Use proper heading hierarchy (# ## ### #### ##### ######)
- Create bullet points with - for lists
- Use numbered lists (1. 2. 3.) where appropriate
- Format code blocks with ``` when applicable
- Use **bold** for emphasis and *italics* for secondary emphasis
- Create tables using | syntax when tabular data is present
- Use > for callouts/quotes
- Add horizontal rules (---) to separate major sections
- Preserve important formatting like dates, numbers, and technical terms
- Remove any OCR artifacts or formatting noise
- Organize content logically with clear section breaks
- Use checkboxes - [ ] for task lists if applicable

STRUCTURE REQUIREMENTS:
- Start with a clear title using #
- Use consistent heading levels for hierarchy
- Group related content under appropriate headings
- Maintain readability and logical flow
- Preserve all important information while improving readability";

/// JSON Schema of one question, rendered once.
static QUESTION_SCHEMA: Lazy<String> = Lazy::new(|| {
    let schema = schemars::schema_for!(QuizQuestion);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
});

pub fn summary_prompt(text: &str, bullet_count: u32) -> String {
    format!(
        "Summarize the following text into {bullet_count} concise bullet points (each one sentence). Output only the bullets.\n\n{text}"
    )
}

pub fn question_prompt(text: &str, count: u32) -> String {
    format!(
        "From the text below, generate {count} multiple-choice questions for studying.
Each question must be an object with these fields:
  - id: number (starting at 1)
  - question: short question text
  - choices: object with keys \"A\",\"B\",\"C\",\"D\"
  - answer: one uppercase letter \"A\",\"B\",\"C\",or \"D\"
  - explanation: 1-2 sentence explanation of the correct answer

{JSON_ONLY_INSTRUCTION} Example:
{QUESTION_EXAMPLE}

Each element must satisfy this JSON Schema:
{schema}

Text to use:

{text}",
        schema = QUESTION_SCHEMA.as_str(),
    )
}

pub fn markdown_prompt(text: &str) -> String {
    format!(
        "Convert the following text content (extracted from a PDF) into clean, well-structured Notion-style markdown format.

{MARKDOWN_GUIDELINES}

TEXT TO CONVERT:

{text}"
    )
}
