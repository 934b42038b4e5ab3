use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("failed to set parser language: {language}")]
    LanguageSetupFailed { language: String },

    #[error("failed to parse source code in {path}")]
    ParseFailed { path: PathBuf },

    #[error("invalid query pattern for {language}/{query_name}: {message}")]
    InvalidQuery {
        language: String,
        query_name: String,
        message: String,
    },
}

impl ParserError {
    pub fn language_setup_failed(language: impl Into<String>) -> Self {
        Self::LanguageSetupFailed {
            language: language.into(),
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>) -> Self {
        Self::ParseFailed { path: path.into() }
    }

    pub fn invalid_query(
        language: impl Into<String>,
        query_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidQuery {
            language: language.into(),
            query_name: query_name.into(),
            message: message.into(),
        }
    }
}
