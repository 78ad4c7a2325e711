use std::path::PathBuf;

use serde::Serialize;

/// Where the quiz text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceContent {
    Topic(String),
    Document(PathBuf),
}

impl SourceContent {
    pub fn is_document(&self) -> bool {
        matches!(self, SourceContent::Document(_))
    }
}

/// Plain text produced by extraction or taken verbatim from a topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Model-written bullet summary, kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
