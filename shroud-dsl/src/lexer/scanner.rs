//! Word reader: splits line sources into words, with nested includes

use super::source::LineSource;
use super::token::{is_delimiter, COMMENT_CHARACTER};
use crate::error::{ParseError, ParseResult};
use shroud_core::ParserSettings;
use tracing::debug;

// ============================================================================
// SOURCE FRAME
// ============================================================================

/// One line source plus its scanning position.
struct Frame {
    source: Box<dyn LineSource>,
    line: String,
    /// Byte offset of the next unread character.
    index: usize,
    /// Byte offset where the comment starts, or the line length.
    end: usize,
    current_word: Option<String>,
    comments: Option<String>,
}

impl Frame {
    fn new(source: Box<dyn LineSource>) -> Self {
        Self {
            source,
            line: String::new(),
            index: 0,
            end: 0,
            current_word: None,
            comments: None,
        }
    }

    fn next_word(&mut self, path_separator: char) -> ParseResult<Option<String>> {
        self.current_word = None;

        // Skip whitespace, pulling in new lines as needed.
        loop {
            let rest = &self.line[self.index..self.end];
            let trimmed = rest.trim_start();
            self.index += rest.len() - trimmed.len();
            if !trimmed.is_empty() {
                break;
            }

            let line = self
                .source
                .next_line()
                .map_err(|err| ParseError::io(self.source.description(), err))?;
            let Some(line) = line else {
                return Ok(None);
            };

            self.end = match line.find(COMMENT_CHARACTER) {
                Some(start) => {
                    self.push_comment(&line[start + COMMENT_CHARACTER.len_utf8()..]);
                    start
                }
                None => line.len(),
            };
            self.line = line;
            self.index = 0;
        }

        let rest = &self.line[self.index..self.end];
        let length = match rest.chars().next() {
            Some(c) if is_delimiter(c, path_separator) => c.len_utf8(),
            _ => rest
                .find(|c: char| c.is_whitespace() || is_delimiter(c, path_separator))
                .unwrap_or(rest.len()),
        };

        let word = rest[..length].to_string();
        self.index += length;
        self.current_word = Some(word.clone());
        Ok(Some(word))
    }

    fn push_comment(&mut self, comment: &str) {
        match &mut self.comments {
            Some(comments) => {
                comments.push('\n');
                comments.push_str(comment);
            }
            None => self.comments = Some(comment.to_string()),
        }
    }

    fn location_description(&self) -> String {
        match &self.current_word {
            Some(word) => format!("'{}' in {}", word, self.source.line_location()),
            None => format!("end of {}", self.source.line_location()),
        }
    }
}

// ============================================================================
// WORD READER
// ============================================================================

/// Reads words from a stack of line sources.
///
/// The bottom frame is the root source. Included sources are pushed on top
/// and popped once exhausted, after which reading resumes in the source that
/// included them.
pub struct WordReader {
    frames: Vec<Frame>,
    path_separator: char,
    max_include_depth: usize,
}

impl WordReader {
    pub fn new(root: Box<dyn LineSource>, settings: &ParserSettings) -> Self {
        Self {
            frames: vec![Frame::new(root)],
            path_separator: settings.path_separator,
            max_include_depth: settings.max_include_depth,
        }
    }

    /// The class path separator this reader treats as a word.
    pub fn path_separator(&self) -> char {
        self.path_separator
    }

    /// Number of includes currently open above the root.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Push an included source; the next word comes from it.
    pub fn include(&mut self, source: Box<dyn LineSource>) -> ParseResult<()> {
        if self.depth() >= self.max_include_depth {
            return Err(ParseError::syntax(
                format!(
                    "Include nesting deeper than {} levels at",
                    self.max_include_depth
                ),
                self.location_description(),
            ));
        }

        debug!(
            depth = self.depth() + 1,
            source = %source.description(),
            "Entering included configuration"
        );
        self.frames.push(Frame::new(source));
        Ok(())
    }

    /// Next word from the innermost source that still has one.
    pub fn next_word(&mut self) -> ParseResult<Option<String>> {
        loop {
            let path_separator = self.path_separator;
            let Some(frame) = self.frames.last_mut() else {
                return Ok(None);
            };

            if let Some(word) = frame.next_word(path_separator)? {
                return Ok(Some(word));
            }

            if self.frames.len() == 1 {
                return Ok(None);
            }

            if let Some(finished) = self.frames.pop() {
                debug!(
                    depth = self.frames.len(),
                    source = %finished.source.description(),
                    "Leaving included configuration"
                );
            }
        }
    }

    /// Comments read by the innermost source since the last call, joined by
    /// newlines.
    pub fn last_comments(&mut self) -> Option<String> {
        self.frames.last_mut().and_then(|frame| frame.comments.take())
    }

    /// `'word' in <line location>`, or `end of <line location>`.
    pub fn location_description(&self) -> String {
        self.frames
            .last()
            .map(Frame::location_description)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::source::{ArgumentLines, TextLines};

    fn settings() -> ParserSettings {
        ParserSettings::default().with_path_separator(':')
    }

    fn words(reader: &mut WordReader) -> Vec<String> {
        let mut words = Vec::new();
        while let Some(word) = reader.next_word().unwrap() {
            words.push(word);
        }
        words
    }

    #[test]
    fn test_delimiters_are_single_words() {
        let source = TextLines::new("t.pro", "-keep class a.B{void <init>(int,long);}");
        let mut reader = WordReader::new(Box::new(source), &settings());
        assert_eq!(
            words(&mut reader),
            vec![
                "-keep", "class", "a.B", "{", "void", "<init>", "(", "int", ",", "long", ")", ";",
                "}"
            ]
        );
    }

    #[test]
    fn test_path_separator_splits_arguments() {
        let source = ArgumentLines::new(["-injars", "a.jar:b.jar(x,y):c"]);
        let mut reader = WordReader::new(Box::new(source), &settings());
        assert_eq!(
            words(&mut reader),
            vec!["-injars", "a.jar", ":", "b.jar", "(", "x", ",", "y", ")", ":", "c"]
        );
    }

    #[test]
    fn test_comments_accumulate_until_taken() {
        let text = "# first\n#second\n-keep class A\n# trailing\n-verbose # same line";
        let mut reader = WordReader::new(Box::new(TextLines::new("t.pro", text)), &settings());

        assert_eq!(reader.next_word().unwrap().as_deref(), Some("-keep"));
        assert_eq!(reader.last_comments().as_deref(), Some(" first\nsecond"));
        assert_eq!(reader.last_comments(), None);

        assert_eq!(reader.next_word().unwrap().as_deref(), Some("class"));
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("A"));
        assert_eq!(reader.next_word().unwrap().as_deref(), Some("-verbose"));
        assert_eq!(
            reader.last_comments().as_deref(),
            Some(" trailing\n same line")
        );
    }

    #[test]
    fn test_location_description() {
        let mut reader = WordReader::new(
            Box::new(TextLines::new("t.pro", "\n-verbose")),
            &settings(),
        );
        reader.next_word().unwrap();
        assert_eq!(reader.location_description(), "'-verbose' in line 2 of file 't.pro'");
        assert_eq!(reader.next_word().unwrap(), None);
        assert_eq!(reader.location_description(), "end of line 2 of file 't.pro'");
    }

    #[test]
    fn test_include_resumes_outer_source() -> ParseResult<()> {
        let mut reader = WordReader::new(Box::new(ArgumentLines::new(["a", "b"])), &settings());
        assert_eq!(reader.next_word()?.as_deref(), Some("a"));

        reader.include(Box::new(TextLines::new("inc.pro", "x\ny")))?;
        assert_eq!(reader.depth(), 1);
        assert_eq!(reader.next_word()?.as_deref(), Some("x"));
        assert_eq!(reader.location_description(), "'x' in line 1 of file 'inc.pro'");
        assert_eq!(reader.next_word()?.as_deref(), Some("y"));
        assert_eq!(reader.next_word()?.as_deref(), Some("b"));
        assert_eq!(reader.depth(), 0);
        assert_eq!(reader.next_word()?, None);
        Ok(())
    }

    #[test]
    fn test_include_depth_is_bounded() -> ParseResult<()> {
        let settings = settings().with_max_include_depth(2);
        let mut reader = WordReader::new(Box::new(ArgumentLines::new(["a"])), &settings);
        reader.include(Box::new(TextLines::new("one.pro", "x")))?;
        reader.include(Box::new(TextLines::new("two.pro", "y")))?;

        let err = reader
            .include(Box::new(TextLines::new("three.pro", "z")))
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Include nesting deeper than 2 levels at"));
        Ok(())
    }
}
