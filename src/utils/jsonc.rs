//! Editor settings and launch files are JSON with comments and trailing
//! commas. `strip_jsonc` reduces them to plain JSON, keeping line structure
//! so parser errors still point at the right line.

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    String,
    Escape,
    LineComment,
    BlockComment,
}

pub fn strip_jsonc(input: &str) -> String {
    let without_comments = strip_comments(input);
    strip_trailing_commas(&without_comments)
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match (c, chars.peek()) {
                ('"', _) => {
                    state = State::String;
                    out.push(c);
                }
                ('/', Some('/')) => {
                    chars.next();
                    state = State::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    state = State::BlockComment;
                }
                _ => out.push(c),
            },
            State::String => {
                match c {
                    '\\' => state = State::Escape,
                    '"' => state = State::Code,
                    _ => {}
                }
                out.push(c);
            }
            State::Escape => {
                state = State::String;
                out.push(c);
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    out.push(c);
                }
            }
            State::BlockComment => match (c, chars.peek()) {
                ('*', Some('/')) => {
                    chars.next();
                    state = State::Code;
                }
                ('\n', _) => out.push(c),
                _ => {}
            },
        }
    }

    out
}

fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_and_block_comments() {
        let input = r#"{
    // Use IntelliSense to learn about possible attributes.
    "version": "0.2.0", /* inline */
    "configurations": []
}"#;
        let value: serde_json::Value = serde_json::from_str(&strip_jsonc(input)).unwrap();
        assert_eq!(value["version"], "0.2.0");
        assert_eq!(strip_jsonc(input).lines().count(), input.lines().count());
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let input = r#"{"url": "http://localhost/*", "path": "a\"//b"}"#;
        assert_eq!(strip_jsonc(input), input);
    }

    #[test]
    fn test_strip_trailing_commas() {
        let input = "{\"configurations\": [{\"name\": \"a\",},\n],}";
        let value: serde_json::Value = serde_json::from_str(&strip_jsonc(input)).unwrap();
        assert_eq!(value["configurations"][0]["name"], "a");
    }

    #[test]
    fn test_commas_inside_strings_survive() {
        let input = r#"{"buildFlags": "-tags 'a,]'"}"#;
        assert_eq!(strip_jsonc(input), input);
    }
}
