use thiserror::Error;

/// Failures while turning a cursor into a subtest identifier, or an
/// identifier back into a location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("line {line} is empty")]
    EmptyLine { line: usize },

    #[error("no quoted subtest name on line {line}")]
    NoQuotedLiteral { line: usize },

    #[error("no symbol contains line {line}, column {column}")]
    SymbolNotFound { line: usize, column: usize },

    #[error("'{name}' is not a go test function")]
    NotATestFunction { name: String },

    #[error("match \"{pattern}\" not found")]
    PatternNotFound { pattern: String },
}

impl ResolveError {
    pub fn not_a_test_function(name: impl Into<String>) -> Self {
        Self::NotATestFunction { name: name.into() }
    }

    pub fn pattern_not_found(pattern: impl Into<String>) -> Self {
        Self::PatternNotFound {
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_test_function_display() {
        let err = ResolveError::not_a_test_function("helper");
        assert_eq!(err.to_string(), "'helper' is not a go test function");
    }

    #[test]
    fn test_pattern_not_found_display() {
        let err = ResolveError::pattern_not_found("TestFoo/case_one");
        assert_eq!(err.to_string(), "match \"TestFoo/case_one\" not found");
    }
}
