//! Code fences that survive backticks inside the fenced content.

/// Length of the longest run of consecutive backticks in `content`.
pub fn longest_backtick_run(content: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for b in content.bytes() {
        if b == b'`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// A backtick fence longer than any run in `content`, and at least three long.
pub fn fence_for(content: &str) -> String {
    "`".repeat((longest_backtick_run(content) + 1).max(3))
}

/// Wraps `content` in a fenced block tagged with `lang`.
pub fn fenced_block(content: &str, lang: &str) -> String {
    let fence = fence_for(content);
    format!("{fence}{lang}\n{content}\n{fence}\n")
}
