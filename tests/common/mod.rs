use wordwrap::wrap::display_width;

/// Asserts every line fits within `limit`, allowing a line made of a single
/// visible character that is wider than the limit by itself.
pub fn assert_lines_fit(lines: &[String], limit: usize) {
    for line in lines {
        let visible = line.chars().filter(|c| display_width(&c.to_string()) > 0).count();
        assert!(
            display_width(line) <= limit || visible <= 1,
            "line {:?} is wider than {} in {:?}",
            line,
            limit,
            lines
        );
    }
}

/// Owned lines from string literals, for comparisons.
#[allow(dead_code)]
pub fn lines(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}
