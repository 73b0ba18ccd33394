//! Line-oriented prompting over any `BufRead` source.
//!
//! Reading from a generic source instead of `stdin` directly keeps the
//! menu handlers drivable from piped input in the integration tests.

use std::io::{self, BufRead, Write};

pub struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `label` and read one line, without the trailing newline.
    /// Returns `None` on end of input.
    pub fn line(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Ask a y/n question; `y` or `yes` (any case) counts as yes.
    /// Anything else, including end of input, counts as no.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.line(label)?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some(a) if a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_strips_newline() {
        let mut prompt = Prompt::new(Cursor::new("hello\nworld\r\n"));
        assert_eq!(prompt.line("? ").unwrap(), Some("hello".into()));
        assert_eq!(prompt.line("? ").unwrap(), Some("world".into()));
        assert_eq!(prompt.line("? ").unwrap(), None);
    }

    #[test]
    fn confirm_accepts_yes_variants() {
        let mut prompt = Prompt::new(Cursor::new("y\nYES\n yes \nno\n"));
        assert!(prompt.confirm("? ").unwrap());
        assert!(prompt.confirm("? ").unwrap());
        assert!(prompt.confirm("? ").unwrap());
        assert!(!prompt.confirm("? ").unwrap());
    }

    #[test]
    fn confirm_on_eof_is_no() {
        let mut prompt = Prompt::new(Cursor::new(""));
        assert!(!prompt.confirm("? ").unwrap());
    }
}
