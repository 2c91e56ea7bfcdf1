//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Lines past the end of the shorter side are shown as pure additions or
/// removals. Differences invisible to a line split (trailing newline, `\r`)
/// fall back to a quoted whole-string hunk.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut out = String::from("--- expected\n+++ actual\n");
    if expected_lines == actual_lines {
        out.push_str(&format!("-{expected:?}\n+{actual:?}\n"));
        return out;
    }
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let (e, a) = (expected_lines.get(i), actual_lines.get(i));
        if e == a {
            continue;
        }
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        if let Some(e) = e {
            out.push_str(&format!("-{e}\n"));
        }
        if let Some(a) = a {
            out.push_str(&format!("+{a}\n"));
        }
    }
    out
}
