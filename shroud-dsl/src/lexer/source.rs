//! Line sources feeding the word reader

use crate::error::{ParseError, ParseResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// A sequence of configuration lines with a location for the latest one.
pub trait LineSource {
    /// Next line, or `None` once the source is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Where the most recently returned line came from, e.g.
    /// `line 3 of file 'app.pro'`.
    fn line_location(&self) -> String;

    /// The source as a whole, e.g. `file 'app.pro'`.
    fn description(&self) -> String;
}

// ============================================================================
// COMMAND-LINE ARGUMENTS
// ============================================================================

/// Command-line arguments, one line per argument.
#[derive(Debug, Clone)]
pub struct ArgumentLines {
    arguments: Vec<String>,
    index: usize,
}

impl ArgumentLines {
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }
}

impl LineSource for ArgumentLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = self.arguments.get(self.index).cloned();
        if line.is_some() {
            self.index += 1;
        }
        Ok(line)
    }

    fn line_location(&self) -> String {
        format!("argument number {}", self.index)
    }

    fn description(&self) -> String {
        "command-line arguments".to_string()
    }
}

// ============================================================================
// FILES
// ============================================================================

/// A configuration file read lazily through a buffer.
pub struct FileLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl FileLines {
    /// Open `path` as given, relative to the working directory.
    pub fn open(path: impl AsRef<Path>) -> ParseResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .map_err(|err| ParseError::io(format!("file '{}'", path.display()), err))?;
        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }
}

impl LineSource for FileLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.next().transpose()?;
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    fn line_location(&self) -> String {
        format!("line {} of {}", self.line_number, self.description())
    }

    fn description(&self) -> String {
        format!("file '{}'", self.path.display())
    }
}

// ============================================================================
// IN-MEMORY TEXT
// ============================================================================

/// Configuration text already in memory, located like a file.
#[derive(Debug, Clone)]
pub struct TextLines {
    kind: &'static str,
    name: String,
    lines: Vec<String>,
    index: usize,
}

impl TextLines {
    /// Text reported as `file '<name>'`.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Self::with_kind("file", name, text)
    }

    fn with_kind(kind: &'static str, name: impl Into<String>, text: &str) -> Self {
        Self {
            kind,
            name: name.into(),
            lines: text.lines().map(str::to_string).collect(),
            index: 0,
        }
    }
}

impl LineSource for TextLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = self.lines.get(self.index).cloned();
        if line.is_some() {
            self.index += 1;
        }
        Ok(line)
    }

    fn line_location(&self) -> String {
        format!("line {} of {}", self.index, self.description())
    }

    fn description(&self) -> String {
        format!("{} '{}'", self.kind, self.name)
    }
}

// ============================================================================
// REMOTE CONFIGURATIONS
// ============================================================================

/// A configuration fetched over http(s), located as `line N of url '<url>'`.
#[cfg(feature = "remote")]
pub struct RemoteLines;

#[cfg(feature = "remote")]
impl RemoteLines {
    /// Download the whole body up front; the reader then works from memory.
    pub fn fetch(url: &str) -> ParseResult<TextLines> {
        let resource = format!("url '{url}'");
        let body = reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|err| ParseError::io(resource, io::Error::other(err)))?;
        tracing::debug!(url, bytes = body.len(), "Fetched remote configuration");
        Ok(TextLines::with_kind("url", url, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_argument_lines_count_from_one() {
        let mut source = ArgumentLines::new(["-verbose", "-dontwarn"]);
        assert_eq!(source.line_location(), "argument number 0");
        assert_eq!(source.next_line().unwrap().as_deref(), Some("-verbose"));
        assert_eq!(source.line_location(), "argument number 1");
        assert_eq!(source.next_line().unwrap().as_deref(), Some("-dontwarn"));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.line_location(), "argument number 2");
    }

    #[test]
    fn test_text_lines_located_like_files() {
        let mut source = TextLines::new("app.pro", "-verbose\n\n-dontshrink\n");
        source.next_line().unwrap();
        source.next_line().unwrap();
        assert_eq!(source.line_location(), "line 2 of file 'app.pro'");
        assert_eq!(source.next_line().unwrap().as_deref(), Some("-dontshrink"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_file_lines_reads_from_disk() -> ParseResult<()> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "-injars in.jar").unwrap();
        writeln!(file, "-outjars out.jar").unwrap();

        let mut source = FileLines::open(file.path())?;
        assert_eq!(source.next_line().unwrap().as_deref(), Some("-injars in.jar"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("-outjars out.jar"));
        assert!(source.line_location().starts_with("line 2 of file '"));
        assert_eq!(source.next_line().unwrap(), None);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileLines::open("/nonexistent/shroud/missing.pro")
            .err()
            .expect("missing file should not open");
        assert!(!err.is_syntax());
        assert!(err.to_string().contains("missing.pro"));
    }
}
