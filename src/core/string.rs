pub trait CollapseNewlines {
    /// Collapse every run of 3 or more consecutive newlines to exactly 2.
    ///
    /// Runs of 1 or 2 newlines are left unchanged. Idempotent.
    fn collapse_newlines(&self) -> String;
}

impl CollapseNewlines for str {
    fn collapse_newlines(&self) -> String {
        let mut result = String::with_capacity(self.len());
        let mut run = 0usize;
        for c in self.chars() {
            if c == '\n' {
                run += 1;
                if run <= 2 {
                    result.push('\n');
                }
            } else {
                run = 0;
                result.push(c);
            }
        }
        result
    }
}

#[cfg(test)]
mod ut {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!("", "".collapse_newlines());
    }

    #[test]
    fn test_no_newlines() {
        assert_eq!("abc", "abc".collapse_newlines());
    }

    #[test]
    fn test_short_runs_unchanged() {
        assert_eq!("a\nb", "a\nb".collapse_newlines());
        assert_eq!("a\n\nb", "a\n\nb".collapse_newlines());
    }

    #[test]
    fn test_collapse_three() {
        assert_eq!("a\n\nb", "a\n\n\nb".collapse_newlines());
    }

    #[test]
    fn test_collapse_many() {
        assert_eq!("a\n\nb", "a\n\n\n\n\n\nb".collapse_newlines());
    }

    #[test]
    fn test_collapse_multiple_runs() {
        assert_eq!("a\n\nb\n\nc\n", "a\n\n\nb\n\n\n\nc\n".collapse_newlines());
    }

    #[test]
    fn test_collapse_at_ends() {
        assert_eq!("\n\na\n\n", "\n\n\na\n\n\n".collapse_newlines());
    }

    #[test]
    fn test_idempotent() {
        let once = "a\n\n\n\nb\n\n\nc".collapse_newlines();
        assert_eq!(once, once.collapse_newlines());
    }
}
