//! Bibliography substitution

use crate::core::directive::{find_directive, BIBLIOGRAPHY_STYLE_WORD, BIBLIOGRAPHY_WORD};

/// Substitute the bibliography directives in the fully expanded text.
///
/// Every `\bibliographystyle{...}` is removed. The **first**
/// `\bibliography{...}` is replaced by `replacement`; later occurrences
/// are left untouched (single-substitution policy). If neither directive
/// occurs the text is returned unchanged.
pub fn substitute_bibliography(s: &str, replacement: &str) -> String {
    let s = remove_style_directives(s);
    match find_directive(&s, BIBLIOGRAPHY_WORD, 0) {
        Some(d) => {
            let mut result = String::with_capacity(s.len() + replacement.len());
            result.push_str(&s[..d.start]);
            result.push_str(replacement);
            result.push_str(&s[d.end..]);
            result
        }
        None => s,
    }
}

fn remove_style_directives(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;
    let mut from = 0;
    while let Some(d) = find_directive(s, BIBLIOGRAPHY_STYLE_WORD, from) {
        result.push_str(&s[last..d.start]);
        last = d.end;
        from = d.end;
    }
    result.push_str(&s[last..]);
    result
}
