/// Drops every double quote and turns spaces into underscores, the way
/// `go test -run` names subtests.
pub fn normalize_subtest_name(raw: &str) -> String {
    raw.replace('"', "").replace(' ', "_")
}

/// Splits a configured command line into program and arguments, honoring
/// shell quoting. Unbalanced quotes give `None`.
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = shlex::split(command)?.into_iter();
    let program = parts.next()?;
    Some((program, parts.collect()))
}
