pub mod extractor;
pub mod http_helpers;
pub mod model_service;
pub mod oracle;
pub mod question_parser;
pub mod quiz_service;
