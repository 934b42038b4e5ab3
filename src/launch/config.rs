use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::subtest::TestIdentifier;

pub const GO_DEBUG_TYPE: &str = "go";
pub const LAUNCH_REQUEST: &str = "launch";
pub const TEST_RUN_FLAG: &str = "-test.run";

/// A debug launch entry for running one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub program: String,
    pub build_flags: String,
    pub args: Vec<String>,
}

impl LaunchConfig {
    /// JSON object form, keys in launch.json order.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Single-line JSON, as placed on the clipboard.
    pub fn to_compact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn synthesize(identifier: &TestIdentifier, program: &str, build_tags: &str) -> LaunchConfig {
    LaunchConfig {
        name: identifier.to_string(),
        kind: GO_DEBUG_TYPE.to_string(),
        request: LAUNCH_REQUEST.to_string(),
        program: program.to_string(),
        build_flags: format!("-tags '{build_tags}'"),
        args: vec![TEST_RUN_FLAG.to_string(), identifier.to_string()],
    }
}
