//! Splitting of raw generator output into individual test cases.

/// Line prefixes that open a new test case.
///
/// Matching is case-sensitive and happens on the trimmed line, so
/// `"Scenario Outline:"` and `"  Scenario 3: login"` both open a case.
pub const MARKER_PREFIXES: [&str; 2] = ["Test Case", "Scenario"];

/// Returns true when `line` starts a new test case.
pub fn is_marker(line: &str) -> bool {
    let trimmed = trim_text(line);
    MARKER_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Splits the raw backend output into an ordered list of test cases.
///
/// Every case starts at a marker line (see [`MARKER_PREFIXES`]) and runs up
/// to the next marker. Text before the first marker is dropped. When the
/// output has no markers at all, the whole trimmed text becomes a single
/// case, and blank output yields an empty list.
///
/// # Examples
///
/// ```
/// let cases = casegen_core::split_test_cases("Scenario: A\nstep1\nScenario: B\nstep2");
/// assert_eq!(cases, vec!["Scenario: A\nstep1", "Scenario: B\nstep2"]);
/// ```
pub fn split_test_cases(raw: &str) -> Vec<String> {
    let mut cases: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut found_first_marker = false;

    if !raw.is_empty() {
        for line in raw.split('\n') {
            if is_marker(line) {
                flush(&mut cases, &current, found_first_marker);
                current.clear();
                current.push_str(line);
                found_first_marker = true;
            } else {
                current.push('\n');
                current.push_str(line);
            }
        }
    }
    flush(&mut cases, &current, found_first_marker);

    if found_first_marker {
        tracing::debug!("split generator output into {} test cases", cases.len());
        return cases;
    }

    let whole = trim_text(raw);
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}

/// Trims whitespace and byte order marks from both ends.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn flush(cases: &mut Vec<String>, current: &str, found_first_marker: bool) {
    if !found_first_marker {
        return;
    }
    let trimmed = trim_text(current);
    if !trimmed.is_empty() {
        cases.push(trimmed.to_string());
    }
}
