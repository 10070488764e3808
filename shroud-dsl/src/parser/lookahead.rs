//! Single-word lookahead over a word reader

use crate::error::ParseResult;
use crate::lexer::{WordReader, AT_DIRECTIVE, OPTION_PREFIX};

/// The parser's only buffered state: the next unconsumed word.
pub struct Lookahead {
    reader: WordReader,
    word: Option<String>,
}

impl Lookahead {
    /// Wrap `reader`, loading its first word.
    pub fn new(mut reader: WordReader) -> ParseResult<Self> {
        let word = reader.next_word()?;
        Ok(Self { reader, word })
    }

    pub fn peek(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Replace the lookahead with the next word.
    pub fn advance(&mut self) -> ParseResult<()> {
        self.word = self.reader.next_word()?;
        Ok(())
    }

    /// Whether the lookahead is exactly `literal`.
    pub fn is(&self, literal: &str) -> bool {
        self.peek() == Some(literal)
    }

    /// No word left, or the word starts the next directive.
    pub fn at_directive_end(&self) -> bool {
        match self.peek() {
            None => true,
            Some(word) => word.starts_with(OPTION_PREFIX) || word == AT_DIRECTIVE,
        }
    }

    pub fn reader(&self) -> &WordReader {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut WordReader {
        &mut self.reader
    }

    /// Location of the lookahead word for error messages.
    pub fn location(&self) -> String {
        self.reader.location_description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ArgumentLines;
    use shroud_core::ParserSettings;

    fn lookahead(args: &[&str]) -> Lookahead {
        let reader = WordReader::new(
            Box::new(ArgumentLines::new(args.iter().copied())),
            &ParserSettings::default(),
        );
        Lookahead::new(reader).unwrap()
    }

    #[test]
    fn test_first_word_is_loaded() {
        let cursor = lookahead(&["-verbose"]);
        assert_eq!(cursor.peek(), Some("-verbose"));
        assert!(cursor.is("-verbose"));
        assert_eq!(cursor.location(), "'-verbose' in argument number 1");
    }

    #[test]
    fn test_directive_end() -> ParseResult<()> {
        let mut cursor = lookahead(&["a", "-b", "@", "c"]);
        assert!(!cursor.at_directive_end());
        cursor.advance()?;
        assert!(cursor.at_directive_end());
        cursor.advance()?;
        assert!(cursor.at_directive_end());
        cursor.advance()?;
        assert!(!cursor.at_directive_end());
        cursor.advance()?;
        assert_eq!(cursor.peek(), None);
        assert!(cursor.at_directive_end());
        Ok(())
    }
}
