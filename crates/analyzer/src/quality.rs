//! Function-length heuristic.
//!
//! A single forward pass over the line sequence with two states. A line
//! containing the `function` keyword enters (or re-enters) a function and
//! resets the body counter; every following line counts toward the body, and
//! the first line containing `}` ends the function. If the body exceeded
//! [`MAX_FUNCTION_BODY_LINES`], one finding is reported at the declaration
//! line.
//!
//! Known limitation: the first `}` after a declaration may close an inner
//! block (if/for/while) rather than the function itself, so bodies with
//! nested blocks are under-counted. Output compatibility pins this behavior;
//! fixing it would change which inputs produce findings.

use crate::core::QualityFinding;

/// Bodies longer than this many lines are flagged.
pub const MAX_FUNCTION_BODY_LINES: usize = 50;

enum ScanState {
    Outside,
    InsideFunction {
        start_line: usize,
        body_lines: usize,
    },
}

pub(crate) fn function_length_findings(source: &str) -> Vec<QualityFinding> {
    let mut findings = Vec::new();
    let mut state = ScanState::Outside;

    for (index, line) in source.split('\n').enumerate() {
        if line.contains("function") {
            // A declaration always starts a fresh count, even mid-function.
            state = ScanState::InsideFunction {
                start_line: index + 1,
                body_lines: 0,
            };
        } else if let ScanState::InsideFunction {
            start_line,
            body_lines,
        } = state
        {
            let body_lines = body_lines + 1;

            if line.contains('}') {
                if body_lines > MAX_FUNCTION_BODY_LINES {
                    findings.push(QualityFinding::new(
                        "Function Length",
                        "Function is too long",
                        start_line,
                        "Consider breaking down into smaller functions",
                    ));
                }
                state = ScanState::Outside;
            } else {
                state = ScanState::InsideFunction {
                    start_line,
                    body_lines,
                };
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract_with_body_lines(filler: usize) -> String {
        let mut lines = vec!["function foo() {".to_string()];
        for i in 0..filler {
            lines.push(format!("    value = {};", i));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    #[test]
    fn long_function_is_flagged_at_declaration_line() {
        let source = contract_with_body_lines(55);
        let findings = function_length_findings(&source);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, "Function Length");
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn short_function_is_not_flagged() {
        let source = contract_with_body_lines(40);
        assert!(function_length_findings(&source).is_empty());
    }

    #[test]
    fn threshold_counts_the_closing_brace_line() {
        // 50 filler lines plus the brace line is 51 body lines, just over.
        let over = contract_with_body_lines(50);
        assert_eq!(function_length_findings(&over).len(), 1);

        let under = contract_with_body_lines(49);
        assert!(function_length_findings(&under).is_empty());
    }

    #[test]
    fn inner_brace_ends_the_count_early() {
        // The `if` block's closing brace is treated as the function end, so
        // the long tail after it is never counted. Pinned behavior.
        let mut lines = vec![
            "function foo() {".to_string(),
            "    if (cond) {".to_string(),
            "        doThing();".to_string(),
            "    }".to_string(),
        ];
        for i in 0..60 {
            lines.push(format!("    value = {};", i));
        }
        lines.push("}".to_string());

        assert!(function_length_findings(&lines.join("\n")).is_empty());
    }

    #[test]
    fn declaration_line_resets_an_open_count() {
        let mut lines = vec!["function first() {".to_string()];
        for i in 0..60 {
            lines.push(format!("    value = {};", i));
        }
        // No brace yet: the second declaration restarts the state machine.
        lines.push("function second() {".to_string());
        lines.push("    noop();".to_string());
        lines.push("}".to_string());

        assert!(function_length_findings(&lines.join("\n")).is_empty());
    }

    #[test]
    fn no_function_keyword_yields_nothing() {
        let source = "uint256 a;\nuint256 b;\n}";
        assert!(function_length_findings(source).is_empty());
    }
}
