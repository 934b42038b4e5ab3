use std::fmt;

use serde::Serialize;

use crate::error::ResolveError;
use crate::utils::normalize_subtest_name;

pub const DEFAULT_TEST_PREFIX: &str = "Test";

/// `Parent/subtest_name`, usable both as a launch configuration name and as
/// a `-test.run` pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TestIdentifier(String);

impl TestIdentifier {
    pub fn build(
        parent: &str,
        raw_literal: &str,
        test_prefix: &str,
    ) -> Result<Self, ResolveError> {
        if !parent.starts_with(test_prefix) {
            return Err(ResolveError::not_a_test_function(parent));
        }
        Ok(Self(format!(
            "{parent}/{}",
            normalize_subtest_name(raw_literal)
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TestIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn build_identifier(parent: &str, raw_literal: &str) -> Result<TestIdentifier, ResolveError> {
    TestIdentifier::build(parent, raw_literal, DEFAULT_TEST_PREFIX)
}
