//! Scanner for TeX control words with one brace-delimited argument
//!
//! This covers every pattern the pipeline needs to find: `\input{path}`,
//! `\begin{name}` / `\end{name}`, `\bibliography{path}` and
//! `\bibliographystyle{style}`.

/// Control word of an include directive
pub const INPUT_WORD: &str = "input";
/// Control word of a bibliography directive
pub const BIBLIOGRAPHY_WORD: &str = "bibliography";
/// Control word of a bibliography style directive
pub const BIBLIOGRAPHY_STYLE_WORD: &str = "bibliographystyle";

/// A matched `\word{arg}` directive
///
/// `start..end` is the byte span of the whole match in the scanned text,
/// from the backslash to the closing brace inclusive.
#[derive(Debug, PartialEq)]
pub struct BracedDirective<'a> {
    pub start: usize,
    pub end: usize,
    pub arg: &'a str,
}

/// Find the next `\word{arg}` at or after `from`.
///
/// The argument must be non-empty and cannot contain `}`. The brace must
/// immediately follow the control word, so e.g. `\bibliographystyle{..}`
/// is never matched when scanning for `bibliography`.
pub fn find_directive<'a>(s: &'a str, word: &str, from: usize) -> Option<BracedDirective<'a>> {
    let mut pos = from;
    while pos < s.len() {
        let bs = match s[pos..].find('\\') {
            Some(i) => pos + i,
            None => return None,
        };
        let rest = &s[bs + 1..];
        if let Some(rest) = rest.strip_prefix(word) {
            if let Some(rest) = rest.strip_prefix('{') {
                if let Some(close) = rest.find('}') {
                    if close > 0 {
                        let arg_start = bs + 1 + word.len() + 1;
                        return Some(BracedDirective {
                            start: bs,
                            end: arg_start + close + 1,
                            arg: &s[arg_start..arg_start + close],
                        });
                    }
                }
            }
        }
        pos = bs + 1;
    }
    None
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MarkerKind {
    Begin,
    End,
}

/// A matched `\begin{name}` or `\end{name}` marker
#[derive(Debug, PartialEq)]
pub struct EnvMarker<'a> {
    pub kind: MarkerKind,
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterator over all environment markers in a text block, in document order
pub struct EnvMarkers<'a> {
    text: &'a str,
    pos: usize,
}

pub fn env_markers(text: &str) -> EnvMarkers<'_> {
    EnvMarkers { text, pos: 0 }
}

impl<'a> Iterator for EnvMarkers<'a> {
    type Item = EnvMarker<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // walk backslash to backslash and try both words at each one, so
        // begin and end markers are yielded strictly in document order
        while self.pos < self.text.len() {
            let bs = match self.text[self.pos..].find('\\') {
                Some(i) => self.pos + i,
                None => {
                    self.pos = self.text.len();
                    return None;
                }
            };
            for (kind, word) in [(MarkerKind::Begin, "begin"), (MarkerKind::End, "end")] {
                if let Some(d) = find_directive(self.text, word, bs) {
                    if d.start == bs {
                        self.pos = d.end;
                        return Some(EnvMarker {
                            kind,
                            name: d.arg,
                            start: d.start,
                            end: d.end,
                        });
                    }
                }
            }
            self.pos = bs + 1;
        }
        None
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_find_empty() {
        assert_eq!(None, find_directive("", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_not_directive() {
        assert_eq!(None, find_directive("plain text, no backslash", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_wrong_word() {
        assert_eq!(None, find_directive(r"\include{a}", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_no_brace() {
        assert_eq!(None, find_directive(r"\input a", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_empty_arg() {
        assert_eq!(None, find_directive(r"\input{}", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_unclosed() {
        assert_eq!(None, find_directive(r"\input{abc", INPUT_WORD, 0));
    }

    #[test]
    fn test_find_basic() {
        let s = r"pre \input{chapter} post";
        let expected = Some(BracedDirective {
            start: 4,
            end: 19,
            arg: "chapter",
        });
        assert_eq!(expected, find_directive(s, INPUT_WORD, 0));
    }

    #[test]
    fn test_find_from_offset() {
        let s = r"\input{a} \input{b}";
        let d = find_directive(s, INPUT_WORD, 9).unwrap();
        assert_eq!("b", d.arg);
        assert_eq!(10, d.start);
    }

    #[test]
    fn test_find_skips_longer_word() {
        let s = r"\bibliographystyle{plain} \bibliography{refs}";
        let d = find_directive(s, BIBLIOGRAPHY_WORD, 0).unwrap();
        assert_eq!("refs", d.arg);
        assert_eq!(26, d.start);
    }

    #[test]
    fn test_find_style_word() {
        let s = r"\bibliographystyle{plain}";
        let d = find_directive(s, BIBLIOGRAPHY_STYLE_WORD, 0).unwrap();
        assert_eq!("plain", d.arg);
        assert_eq!(0, d.start);
        assert_eq!(s.len(), d.end);
    }

    #[test]
    fn test_markers_empty() {
        assert_eq!(0, env_markers("").count());
    }

    #[test]
    fn test_markers_none() {
        assert_eq!(0, env_markers(r"\input{a} text \item").count());
    }

    #[test]
    fn test_markers_begin_end() {
        let s = r"\begin{comment}x\end{comment}";
        let markers: Vec<_> = env_markers(s).collect();
        assert_eq!(2, markers.len());
        assert_eq!(MarkerKind::Begin, markers[0].kind);
        assert_eq!("comment", markers[0].name);
        assert_eq!(0, markers[0].start);
        assert_eq!(15, markers[0].end);
        assert_eq!(MarkerKind::End, markers[1].kind);
        assert_eq!("comment", markers[1].name);
        assert_eq!(16, markers[1].start);
        assert_eq!(s.len(), markers[1].end);
    }

    #[test]
    fn test_markers_document_order() {
        let s = "\\end{a}\n\\begin{b}\n\\end{b}";
        let kinds: Vec<_> = env_markers(s).map(|m| m.kind).collect();
        assert_eq!(
            vec![MarkerKind::End, MarkerKind::Begin, MarkerKind::End],
            kinds
        );
    }

    #[test]
    fn test_markers_space_before_brace_not_matched() {
        assert_eq!(0, env_markers(r"\begin {comment}").count());
    }

    #[test]
    fn test_markers_names() {
        let s = r"\begin{figure}\begin{error}\end{error}\end{figure}";
        let names: Vec<_> = env_markers(s).map(|m| m.name).collect();
        assert_eq!(vec!["figure", "error", "error", "figure"], names);
    }
}
