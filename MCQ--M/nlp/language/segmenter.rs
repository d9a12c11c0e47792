use super::lexicon::Lexicon;

const TERMINATORS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '»'];

/// Lazy sentence iterator over a text.
///
/// Each call to `next` scans forward from the previous boundary, so the
/// sequence is produced once and cannot be restarted.
#[derive(Debug)]
pub struct Sentences<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
    cursor: usize,
    lexicon: &'a Lexicon,
}

impl<'a> Sentences<'a> {
    /// Starts segmenting `text`.
    #[must_use]
    pub fn new(text: &'a str, lexicon: &'a Lexicon) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
            cursor: 0,
            lexicon,
        }
    }

    fn byte_at(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.text.len(), |(offset, _)| *offset)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|(_, ch)| *ch)
    }

    fn skip_whitespace(&self, mut index: usize) -> usize {
        while self.char_at(index).is_some_and(char::is_whitespace) {
            index += 1;
        }
        index
    }

    /// End of a blank-line break starting at the newline `index`.
    fn blank_line_end(&self, index: usize) -> Option<usize> {
        let mut next = index + 1;
        while matches!(self.char_at(next), Some(' ' | '\t' | '\r')) {
            next += 1;
        }
        (self.char_at(next) == Some('\n')).then_some(next + 1)
    }

    /// Alphabetic run starting at `index`.
    fn word_at(&self, index: usize) -> &str {
        let mut end = index;
        while self.char_at(end).is_some_and(char::is_alphabetic) {
            end += 1;
        }
        &self.text[self.byte_at(index)..self.byte_at(end)]
    }

    /// True when the period at `index` closes an abbreviation or an initial.
    /// `next` is the first non-space character after it.
    fn period_is_abbreviation(&self, index: usize, next: usize) -> bool {
        let mut start = index;
        while start > 0 {
            match self.char_at(start - 1) {
                Some(ch) if ch.is_alphabetic() || ch == '.' => start -= 1,
                _ => break,
            }
        }
        let word = &self.text[self.byte_at(start)..self.byte_at(index)];
        if word.eq_ignore_ascii_case("no") {
            // "No. 5" but not "the answer is no. We left."
            return self.char_at(next).is_some_and(|ch| ch.is_ascii_digit());
        }
        let mut letters = word.chars();
        let single_initial = matches!(
            (letters.next(), letters.next()),
            (Some(first), None) if first.is_uppercase()
        );
        if single_initial {
            // "J. R. Tolkien" continues; "vitamin C. It helps." does not.
            let following = self.word_at(next);
            return following.chars().next().is_some_and(char::is_uppercase)
                && !self.lexicon.is_stop_word(following);
        }
        self.lexicon.is_abbreviation(word)
    }

    /// Examines the terminator run starting at `index`.
    fn terminal_boundary(&self, index: usize) -> Scan {
        let mut end = index;
        while self.char_at(end).is_some_and(|ch| TERMINATORS.contains(&ch)) {
            end += 1;
        }
        let lone_period = end == index + 1 && self.char_at(index) == Some('.');
        while self.char_at(end).is_some_and(|ch| CLOSERS.contains(&ch)) {
            end += 1;
        }
        if end >= self.chars.len() {
            return Scan::Boundary { end, next: end };
        }
        if !self.char_at(end).is_some_and(char::is_whitespace) {
            return Scan::Resume(end);
        }
        let next = self.skip_whitespace(end);
        match self.char_at(next) {
            None => Scan::Boundary { end, next },
            Some(ch) if ch.is_lowercase() => Scan::Resume(end),
            Some(_) if lone_period && self.period_is_abbreviation(index, next) => Scan::Resume(end),
            Some(_) => Scan::Boundary { end, next },
        }
    }
}

/// Outcome of inspecting a terminator run.
enum Scan {
    /// Sentence ends at `end`; the next one starts at `next`.
    Boundary { end: usize, next: usize },
    /// No boundary; scanning continues at the given index, past the run.
    Resume(usize),
}

impl Iterator for Sentences<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.cursor < self.chars.len() {
            let start = self.cursor;
            let mut index = start;
            let mut boundary = None;
            while index < self.chars.len() {
                match self.char_at(index) {
                    Some('\n') => {
                        if let Some(next) = self.blank_line_end(index) {
                            boundary = Some((index, next));
                            break;
                        }
                        index += 1;
                    }
                    Some(ch) if TERMINATORS.contains(&ch) => match self.terminal_boundary(index) {
                        Scan::Boundary { end, next } => {
                            boundary = Some((end, next));
                            break;
                        }
                        Scan::Resume(resume) => index = resume.max(index + 1),
                    },
                    _ => index += 1,
                }
            }
            let (end, next) = boundary.unwrap_or((self.chars.len(), self.chars.len()));
            self.cursor = next.max(start + 1);
            let sentence = self.text[self.byte_at(start)..self.byte_at(end)].trim();
            if !sentence.is_empty() {
                return Some(sentence.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        let lexicon = Lexicon::english();
        Sentences::new(text, &lexicon).collect()
    }

    #[test]
    fn splits_simple_sentences() {
        assert_eq!(
            split("The quick brown fox jumps. A lazy dog sleeps."),
            vec!["The quick brown fox jumps.", "A lazy dog sleeps."]
        );
    }

    #[test]
    fn abbreviations_and_initials_do_not_split() {
        assert_eq!(
            split("Dr. Smith met J. R. Tolkien in the U.S. today. He smiled!"),
            vec!["Dr. Smith met J. R. Tolkien in the U.S. today.", "He smiled!"]
        );
    }

    #[test]
    fn decimals_and_lowercase_continuations_stay_together() {
        assert_eq!(
            split("Pi is about 3.14 and e.g. tau is larger. Wait... really? Yes."),
            vec!["Pi is about 3.14 and e.g. tau is larger.", "Wait... really?", "Yes."]
        );
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        assert_eq!(
            split("She said \"Stop.\" Then she left."),
            vec!["She said \"Stop.\"", "Then she left."]
        );
    }

    #[test]
    fn blank_lines_always_break() {
        assert_eq!(
            split("Heading without stop\n  \nBody text here"),
            vec!["Heading without stop", "Body text here"]
        );
    }

    #[test]
    fn no_and_single_capitals_can_end_sentences() {
        assert_eq!(
            split("The answer is no. We went home."),
            vec!["The answer is no.", "We went home."]
        );
        assert_eq!(
            split("Take vitamin C. It helps."),
            vec!["Take vitamin C.", "It helps."]
        );
        assert_eq!(
            split("Choose Plan B. We agreed."),
            vec!["Choose Plan B.", "We agreed."]
        );
        assert_eq!(
            split("See No. 5 in the list. Then stop."),
            vec!["See No. 5 in the list.", "Then stop."]
        );
    }

    #[test]
    fn long_terminator_runs_are_scanned_once() {
        let dots = ".".repeat(200_000);
        let text = format!("Start{dots}x then more{dots} End.");
        let started = std::time::Instant::now();
        let sentences = split(&text);
        assert_eq!(sentences.len(), 2);
        assert!(
            started.elapsed() < std::time::Duration::from_secs(5),
            "segmentation took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(split("   \n\n \t").is_empty());
        assert!(split("").is_empty());
    }
}
