//! Canonical source formatting boundary.

use miette::Diagnostic;
use thiserror::Error;

/// The assembled text failed canonical-format validation.
///
/// Since the input to the formatter is machine-generated, this indicates an
/// encoder defect rather than bad user input.
#[derive(Debug, Error, Diagnostic)]
#[error("line {line}: {message}")]
#[diagnostic(code(kubelit::format_error))]
pub struct FormatError {
    pub message: String,
    pub line: usize,
}

impl FormatError {
    fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Boundary between the generation driver and source canonicalisation.
///
/// Implementations must accept both a full compilable unit and a bare
/// sequence of literal statements.
pub trait Format {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Canonicalising re-indenter for generated Go source.
///
/// Validates bracket nesting with string-literal awareness, then re-emits
/// the source with one tab per nesting level, a space after each colon,
/// blank lines dropped inside brace blocks, and runs of blank lines at the
/// top level collapsed to one. Raw (backtick) string literals are not
/// handled; the encoder never emits them.
#[derive(Debug, Default)]
pub struct GoFormatter;

impl GoFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Format for GoFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut out = String::with_capacity(source.len());
        let mut stack: Vec<char> = Vec::new();
        let mut last_blank = true;
        let mut line_count = 0;

        for (i, raw_line) in source.lines().enumerate() {
            let line_no = i + 1;
            line_count = line_no;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() {
                if stack.is_empty() && !last_blank {
                    out.push('\n');
                    last_blank = true;
                }
                continue;
            }

            // Leading closing brackets dedent the line they appear on.
            let lead = trimmed
                .chars()
                .take_while(|c| matches!(c, '}' | ']' | ')'))
                .count();
            for _ in 0..stack.len().saturating_sub(lead) {
                out.push('\t');
            }

            let mut chars = trimmed.chars().peekable();
            let mut in_string = false;
            let mut escaped = false;
            while let Some(c) = chars.next() {
                if in_string {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        in_string = false;
                    }
                    continue;
                }
                match c {
                    '"' => {
                        in_string = true;
                        out.push(c);
                    }
                    '/' if chars.peek() == Some(&'/') => {
                        out.push(c);
                        for rest in chars.by_ref() {
                            out.push(rest);
                        }
                    }
                    '{' => {
                        stack.push('}');
                        out.push(c);
                    }
                    '[' => {
                        stack.push(']');
                        out.push(c);
                    }
                    '(' => {
                        stack.push(')');
                        out.push(c);
                    }
                    '}' | ']' | ')' => match stack.pop() {
                        Some(expected) if expected == c => out.push(c),
                        Some(expected) => {
                            return Err(FormatError::new(
                                format!("expected '{expected}' but found '{c}'"),
                                line_no,
                            ));
                        }
                        None => {
                            return Err(FormatError::new(format!("unmatched '{c}'"), line_no));
                        }
                    },
                    ':' => {
                        out.push(':');
                        if chars.peek().is_some_and(|next| !next.is_whitespace()) {
                            out.push(' ');
                        }
                    }
                    c => out.push(c),
                }
            }
            if in_string {
                return Err(FormatError::new("unterminated string literal", line_no));
            }

            out.push('\n');
            last_blank = false;
        }

        if !stack.is_empty() {
            return Err(FormatError::new(
                format!("{} unclosed bracket(s) at end of source", stack.len()),
                line_count,
            ));
        }

        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_nested_braces() {
        let formatted = GoFormatter::new()
            .format("corev1.Pod{\nSpec:corev1.PodSpec{\nHostname:\"web\",\n},\n}\n")
            .unwrap();
        assert_eq!(
            formatted,
            "corev1.Pod{\n\tSpec: corev1.PodSpec{\n\t\tHostname: \"web\",\n\t},\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_inside_blocks_are_dropped() {
        let formatted = GoFormatter::new()
            .format("corev1.PodSpec{\nHostname:\"web\",\n\n}\n")
            .unwrap();
        assert_eq!(formatted, "corev1.PodSpec{\n\tHostname: \"web\",\n}\n");
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let formatted = GoFormatter::new()
            .format("corev1.PodSpec{\nHostname:\"{{weird}}]\",\n}\n")
            .unwrap();
        assert!(formatted.contains("\"{{weird}}]\""));
    }

    #[test]
    fn test_unbalanced_brackets_are_an_error() {
        let err = GoFormatter::new().format("corev1.PodSpec{\n").unwrap_err();
        assert!(err.to_string().contains("unclosed"));

        let err = GoFormatter::new().format("}\n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_mismatched_brackets_are_an_error() {
        let err = GoFormatter::new().format("x[1}\n").unwrap_err();
        assert!(err.to_string().contains("expected ']'"));
    }

    #[test]
    fn test_full_unit_with_import_block() {
        let source = "package main\n\nimport (\nappsv1 \"k8s.io/api/apps/v1\"\n)\n\nvar x = appsv1.Deployment{\n}\n";
        let formatted = GoFormatter::new().format(source).unwrap();
        assert_eq!(
            formatted,
            "package main\n\nimport (\n\tappsv1 \"k8s.io/api/apps/v1\"\n)\n\nvar x = appsv1.Deployment{\n}\n"
        );
    }
}
