//! Comment stripping

use crate::constants::{FORCE_IGNORE_ENV, IGNORE_BEGIN_COMMENT, IGNORE_END_COMMENT};

/// Rewrite the line-level ignore markers into explicit environment markers.
///
/// `% tex-flatten:ignore-begin` and `% tex-flatten:ignore-end` become
/// `\begin{...}` / `\end{...}` for the reserved sentinel environment, so
/// they participate in the nested region logic like any other marker.
///
/// Must run before [`strip_comments`], otherwise the markers would be
/// removed as ordinary comments.
pub fn rewrite_ignore_markers(s: &str) -> String {
    let s = s.replace(
        IGNORE_BEGIN_COMMENT,
        &format!("\\begin{{{FORCE_IGNORE_ENV}}}"),
    );
    s.replace(IGNORE_END_COMMENT, &format!("\\end{{{FORCE_IGNORE_ENV}}}"))
}

/// Remove every unescaped `%`-to-end-of-line comment.
///
/// A comment starts at a `%` not immediately preceded by a backslash and
/// runs to the next newline inclusive. The whole comment is replaced by a
/// bare `%` followed by the newline, preserving the line count. A comment
/// on the final line with no terminating newline is left as is.
pub fn strip_comments(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len());
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && (i == 0 || bytes[i - 1] != b'\\') {
            match s[i..].find('\n') {
                Some(j) => {
                    result.push_str(&s[last..i]);
                    result.push_str("%\n");
                    i += j + 1;
                    last = i;
                }
                None => break,
            }
        } else {
            i += 1;
        }
    }
    result.push_str(&s[last..]);
    result
}
