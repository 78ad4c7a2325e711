#[cfg(test)]
pub mod fixtures {
    use std::path::Path;

    use lopdf::{
        content::{Content, Operation},
        dictionary, Document, Object, Stream,
    };

    use crate::models::domain::{AnswerKey, Choices, QuizQuestion};

    /// Creates a deterministic, valid question with the given id
    pub fn sample_question(id: u32) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Which property holds for question {}?", id),
            choices: Choices {
                a: "Left subtree keys are larger".to_string(),
                b: "Left subtree keys are smaller".to_string(),
                c: "Keys are unordered".to_string(),
                d: "Every node has two children".to_string(),
            },
            answer: AnswerKey::ALL[(id as usize) % 4],
            explanation: "A binary search tree orders keys by subtree.".to_string(),
        }
    }

    /// Creates `count` questions numbered from 1
    pub fn sample_questions(count: usize) -> Vec<QuizQuestion> {
        (1..=count as u32).map(sample_question).collect()
    }

    /// The JSON array a well-behaved model would return
    pub fn questions_json(count: usize) -> String {
        serde_json::to_string_pretty(&sample_questions(count)).expect("questions serialize")
    }

    /// Builds a one-page PDF whose only content is `text`
    pub fn sample_pdf_bytes(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf saves");
        bytes
    }

    /// Writes a one-page PDF to `path`
    pub fn write_sample_pdf(path: &Path, text: &str) {
        std::fs::write(path, sample_pdf_bytes(text)).expect("pdf written");
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{app_state::AppState, config::Config, services::oracle::MockCompletionOracle};

    pub const BOUNDARY: &str = "quizgen-test-boundary";

    pub struct MultipartPart<'a> {
        pub name: &'a str,
        pub filename: Option<&'a str>,
        pub content_type: Option<&'a str>,
        pub data: &'a [u8],
    }

    /// Content-Type header value matching `multipart_body`
    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    /// Encodes parts as a multipart/form-data body
    pub fn multipart_body(parts: &[MultipartPart<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            let disposition = match part.filename {
                Some(filename) => format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.name, filename
                ),
                None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
            };
            body.extend_from_slice(disposition.as_bytes());
            if let Some(content_type) = part.content_type {
                body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    /// App state backed by a mock oracle and an isolated upload directory
    pub fn test_state(oracle: MockCompletionOracle, upload_dir: &std::path::Path) -> AppState {
        let mut config = Config::test_config();
        config.upload_dir = upload_dir.to_path_buf();
        AppState::with_oracle(config, Arc::new(oracle))
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(3);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[2].id, 3);
    }

    #[test]
    fn test_fixtures_sample_pdf_has_header() {
        let bytes = sample_pdf_bytes("hello");
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_multipart_body_layout() {
        let body = multipart_body(&[MultipartPart {
            name: "numQuestions",
            filename: None,
            content_type: None,
            data: b"3",
        }]);
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with(&format!("--{}\r\n", BOUNDARY)));
        assert!(text.contains("name=\"numQuestions\"\r\n\r\n3\r\n"));
        assert!(text.ends_with(&format!("--{}--\r\n", BOUNDARY)));
    }
}
