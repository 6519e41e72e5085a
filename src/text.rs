//! Delimiter extraction shared by the manifest and scene readers.

/// Text between the first `start` and the first `end` that follows it.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let len = text[from..].find(end)?;
    Some(&text[from..from + len])
}

/// Like [`between`], but only matches within a single line.
pub fn between_on_line<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    between(text, start, end).filter(|found| !found.contains('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_span() {
        assert_eq!(between("a(1) b(2)", "(", ")"), Some("1"));
    }

    #[test]
    fn end_must_follow_start() {
        assert_eq!(between(") x (y", "(", ")"), None);
        assert_eq!(between("no start", "[", "]"), None);
    }

    #[test]
    fn single_line_variant_rejects_newlines() {
        assert_eq!(between("[a\nb]", "[", "]"), Some("a\nb"));
        assert_eq!(between_on_line("[a\nb]", "[", "]"), None);
        assert_eq!(between_on_line("[ab]", "[", "]"), Some("ab"));
    }
}
