mod jsonc;
mod string;

pub use jsonc::strip_jsonc;
pub use string::{normalize_subtest_name, split_command};
