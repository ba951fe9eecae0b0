//! Function body extraction from the monolithic source document
//!
//! Bodies are located by their `def <name>(self):` header and bounded by
//! indentation: the body runs from the line after the header to the first
//! subsequent non-blank line at the header's indentation level or less.
//! Bounding by indentation rather than by the position of the next `def`
//! keeps nested inner definitions inside the body where they belong.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Matches a method header with the single implicit-self parameter.
static DEF_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>[ \t]*)def\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*\(\s*self\s*\)\s*:")
        .unwrap()
});

/// Errors during body extraction
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// No `def <name>(self):` header exists in the source.
    FunctionNotFound(String),
    /// The source defines the name more than once; extraction refuses to
    /// guess which occurrence is meant.
    DuplicateFunction(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::FunctionNotFound(name) => {
                write!(f, "function '{}' not found in source", name)
            }
            ExtractError::DuplicateFunction(name) => {
                write!(f, "function '{}' is defined more than once in source", name)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Width of the leading whitespace run, counting tabs as single columns.
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Extract the body of `def <name>(self):` from the source text.
///
/// Returns the body lines joined with `\n`, without the header line and
/// without trailing blank lines. Blank lines inside the body are kept.
pub fn extract_function_body(source: &str, name: &str) -> Result<String, ExtractError> {
    let lines: Vec<&str> = source.lines().collect();

    let mut header: Option<(usize, usize)> = None;
    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = DEF_HEADER.captures(line) {
            if &caps["name"] == name {
                if header.is_some() {
                    return Err(ExtractError::DuplicateFunction(name.to_string()));
                }
                header = Some((i, caps["indent"].len()));
            }
        }
    }

    let (header_line, header_indent) =
        header.ok_or_else(|| ExtractError::FunctionNotFound(name.to_string()))?;

    // Body ends at the first non-blank line back at (or above) the header's
    // indentation level, or at end of file.
    let mut end = lines.len();
    for (i, line) in lines.iter().enumerate().skip(header_line + 1) {
        if line.trim().is_empty() {
            continue;
        }
        if indent_width(line) <= header_indent {
            end = i;
            break;
        }
    }

    let mut body = &lines[header_line + 1..end];
    while let Some(last) = body.last() {
        if last.trim().is_empty() {
            body = &body[..body.len() - 1];
        } else {
            break;
        }
    }

    Ok(body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
class Setup:
    def __init__(self):
        self.home_dir = '/home/u'
        self.port = None

    def first_step(self):
        print('first')
        return True

    def second_step(self):
        print('second')
        return False
";

    #[test]
    fn extracts_body_without_header_line() {
        let body = extract_function_body(SOURCE, "first_step").unwrap();
        assert_eq!(body, "        print('first')\n        return True");
    }

    #[test]
    fn extracts_initializer_body() {
        let body = extract_function_body(SOURCE, "__init__").unwrap();
        assert_eq!(
            body,
            "        self.home_dir = '/home/u'\n        self.port = None"
        );
    }

    #[test]
    fn body_stops_before_next_definition() {
        let body = extract_function_body(SOURCE, "first_step").unwrap();
        assert!(!body.contains("def second_step"));
        assert!(!body.contains("second"));
    }

    #[test]
    fn last_function_runs_to_end_of_file() {
        let body = extract_function_body(SOURCE, "second_step").unwrap();
        assert_eq!(body, "        print('second')\n        return False");
    }

    #[test]
    fn missing_function_reports_its_name() {
        let err = extract_function_body(SOURCE, "no_such_step").unwrap_err();
        assert_eq!(err, ExtractError::FunctionNotFound("no_such_step".to_string()));
        assert!(err.to_string().contains("no_such_step"));
    }

    #[test]
    fn duplicate_definition_is_an_error() {
        let doubled = format!("{}\n    def first_step(self):\n        return True\n", SOURCE);
        let err = extract_function_body(&doubled, "first_step").unwrap_err();
        assert_eq!(err, ExtractError::DuplicateFunction("first_step".to_string()));
    }

    #[test]
    fn nested_inner_def_does_not_truncate_the_body() {
        let source = "\
class Setup:
    def outer(self):
        def helper(x):
            return x + 1
        return helper(1) == 2

    def after(self):
        return True
";
        let body = extract_function_body(source, "outer").unwrap();
        assert!(body.contains("def helper(x):"));
        assert!(body.contains("return helper(1) == 2"));
        assert!(!body.contains("def after"));
    }

    #[test]
    fn blank_lines_inside_body_are_kept_trailing_ones_dropped() {
        let source = "\
class Setup:
    def spaced(self):
        a = 1

        b = 2


    def next_one(self):
        return True
";
        let body = extract_function_body(source, "spaced").unwrap();
        assert_eq!(body, "        a = 1\n\n        b = 2");
    }

    #[test]
    fn functions_without_self_parameter_are_not_headers() {
        let source = "\
def free_function():
    return 1

class Setup:
    def wanted(self):
        return True
";
        assert!(extract_function_body(source, "free_function").is_err());
        assert!(extract_function_body(source, "wanted").is_ok());
    }
}
