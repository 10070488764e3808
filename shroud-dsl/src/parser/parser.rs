//! Configuration parser: top-level directives

use super::directive::Directive;
use super::lookahead::Lookahead;
use crate::error::{ParseError, ParseResult};
use crate::lexer::*;
use crate::properties::{Properties, PropertyError};
use shroud_core::class_util::{internal_class_name, is_java_identifier_pattern};
use shroud_core::{ClassPath, ClassPathEntry, Configuration, ParserSettings, ValidationError};
use std::path::Path;
use tracing::{debug, trace};

// ============================================================================
// PARSER
// ============================================================================

/// Recursive-descent parser for keep-rule configurations.
///
/// Always holds one word of lookahead. Every sub-parser returns with the word
/// following its directive loaded.
pub struct ConfigurationParser {
    pub(crate) cursor: Lookahead,
    pub(crate) properties: Properties,
    /// Comments read right before the directive being parsed.
    pub(crate) last_comments: Option<String>,
}

impl ConfigurationParser {
    /// Parse command-line arguments, each argument being one line.
    pub fn from_args<I, S>(args: I, settings: &ParserSettings) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_source(Box::new(ArgumentLines::new(args)), settings)
    }

    /// Parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>, settings: &ParserSettings) -> ParseResult<Self> {
        Self::from_source(Box::new(FileLines::open(path)?), settings)
    }

    /// Parse configuration text held in memory, located as file `name`.
    pub fn from_text(
        name: impl Into<String>,
        text: &str,
        settings: &ParserSettings,
    ) -> ParseResult<Self> {
        Self::from_source(Box::new(TextLines::new(name, text)), settings)
    }

    /// Parse a configuration fetched from an http(s) URL.
    #[cfg(feature = "remote")]
    pub fn from_url(url: &str, settings: &ParserSettings) -> ParseResult<Self> {
        Self::from_source(Box::new(RemoteLines::fetch(url)?), settings)
    }

    /// Parse any line source. Reads the first word.
    pub fn from_source(root: Box<dyn LineSource>, settings: &ParserSettings) -> ParseResult<Self> {
        let reader = WordReader::new(root, settings);
        let properties = Properties::system()
            .with("path.separator", settings.path_separator.to_string())
            .with_inherit_environment(settings.inherit_environment);

        Ok(Self {
            cursor: Lookahead::new(reader)?,
            properties,
            last_comments: None,
        })
    }

    /// Replace the table used for `<name>` substitution.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Parse every remaining directive into `config`.
    ///
    /// On error `config` may be partially updated and should be discarded.
    pub fn parse(&mut self, config: &mut Configuration) -> ParseResult<()> {
        while let Some(word) = self.cursor.peek() {
            let word = word.to_string();
            self.last_comments = self.cursor.reader_mut().last_comments();

            let Some((keyword, directive)) = Directive::lookup(&word) else {
                return Err(self.error("Unknown configuration"));
            };
            trace!(keyword, word = %word, "Dispatching directive");

            match directive {
                Directive::Include => self.parse_include()?,
                Directive::LibraryJars => {
                    config.library_jars = Some(self.parse_class_path(config.library_jars.take())?)
                }
                Directive::InJars => {
                    config.in_jars = Some(self.parse_class_path(config.in_jars.take())?)
                }
                Directive::ResourceJars => {
                    config.resource_jars =
                        Some(self.parse_class_path(config.resource_jars.take())?)
                }
                Directive::OutJars => {
                    config.out_jars = Some(self.parse_class_path(config.out_jars.take())?)
                }
                Directive::Keep(intent) => {
                    let spec = self.parse_keep(intent)?;
                    config.keep.push(spec);
                }
                Directive::KeepAttributes => {
                    config.keep_attributes =
                        Some(self.parse_keep_attributes(config.keep_attributes.take())?)
                }
                Directive::RenameSourceFileAttribute => {
                    config.new_source_file_attribute = Some(self.parse_optional_argument()?)
                }
                Directive::PrintSeeds => config.print_seeds = Some(self.parse_optional_argument()?),
                Directive::PrintUsage => config.print_usage = Some(self.parse_optional_argument()?),
                Directive::PrintMapping => {
                    config.print_mapping = Some(self.parse_optional_argument()?)
                }
                Directive::ApplyMapping => {
                    config.apply_mapping = Some(self.parse_optional_argument()?)
                }
                Directive::Dump => config.dump = Some(self.parse_optional_argument()?),
                Directive::DefaultPackage => {
                    config.default_package =
                        Some(internal_class_name(&self.parse_optional_argument()?))
                }
                Directive::Verbose => config.verbose = self.parse_no_argument(true)?,
                Directive::IgnoreWarnings => config.ignore_warnings = self.parse_no_argument(true)?,
                Directive::DontWarn => config.warn = self.parse_no_argument(false)?,
                Directive::DontNote => config.note = self.parse_no_argument(false)?,
                Directive::DontShrink => config.shrink = self.parse_no_argument(false)?,
                Directive::DontObfuscate => config.obfuscate = self.parse_no_argument(false)?,
                Directive::DontUseMixedCaseClassNames => {
                    config.use_mixed_case_class_names = self.parse_no_argument(false)?
                }
                Directive::OverloadAggressively => {
                    config.overload_aggressively = self.parse_no_argument(true)?
                }
                Directive::DontSkipNonPublicLibraryClasses => {
                    config.skip_non_public_library_classes = self.parse_no_argument(false)?
                }
            }
        }

        debug!(
            keep_rules = config.keep.len(),
            in_jars = config.in_jars.as_ref().map_or(0, ClassPath::len),
            out_jars = config.out_jars.as_ref().map_or(0, ClassPath::len),
            "Parsed configuration"
        );
        Ok(())
    }

    // ========================================================================
    // DIRECTIVE PARSERS
    // ========================================================================

    /// `@file` / `-include file`
    fn parse_include(&mut self) -> ParseResult<()> {
        let name = self.read_word("configuration file name")?;
        let name = self.replace_properties(&name)?;
        let source = FileLines::open(&name)?;
        self.cursor.reader_mut().include(Box::new(source))?;
        self.cursor.advance()
    }

    /// `entry[(filter,...)][:entry...]`, appended to `class_path`.
    fn parse_class_path(&mut self, class_path: Option<ClassPath>) -> ParseResult<ClassPath> {
        let mut class_path = class_path.unwrap_or_default();
        let separator = self.cursor.reader().path_separator().to_string();

        loop {
            let name = self.read_word("jar or directory name")?;
            let mut entry = ClassPathEntry::new(self.replace_properties(&name)?);

            self.cursor.advance()?;
            if !self.cursor.at_directive_end() && self.cursor.is(OPEN_ARGUMENTS_KEYWORD) {
                let filters = self.parse_comma_separated_list(false, true, false)?;
                entry = entry.with_filter(filters.join(ARGUMENT_SEPARATOR_KEYWORD));
                self.cursor.advance()?;
            }
            class_path.push(entry);

            if self.cursor.at_directive_end() {
                return Ok(class_path);
            }
            if !self.cursor.is(&separator) {
                return Err(self.error(format!(
                    "Expecting class path separator '{separator}' before"
                )));
            }
        }
    }

    /// `*`, nothing, or `Name,Name,...`. An empty list retains everything.
    fn parse_keep_attributes(
        &mut self,
        attributes: Option<Vec<String>>,
    ) -> ParseResult<Vec<String>> {
        let mut attributes = attributes.unwrap_or_default();

        self.cursor.advance()?;
        if self.cursor.at_directive_end() {
            attributes.clear();
            return Ok(attributes);
        }
        if self.cursor.is(ANY_ATTRIBUTE_KEYWORD) {
            attributes.clear();
            self.cursor.advance()?;
            return Ok(attributes);
        }

        loop {
            let name = self.current_word();
            attributes.push(name);

            self.cursor.advance()?;
            if self.cursor.at_directive_end() {
                return Ok(attributes);
            }
            if !self.cursor.is(ATTRIBUTE_SEPARATOR_KEYWORD) {
                return Err(self.error(format!(
                    "Expecting attribute name separator '{ATTRIBUTE_SEPARATOR_KEYWORD}' before"
                )));
            }
            self.read_word("attribute name")?;
        }
    }

    /// Option followed by an optional single word; `""` when it is absent.
    fn parse_optional_argument(&mut self) -> ParseResult<String> {
        self.cursor.advance()?;
        if self.cursor.at_directive_end() {
            return Ok(String::new());
        }
        let argument = self.current_word();
        self.cursor.advance()?;
        Ok(argument)
    }

    fn parse_no_argument(&mut self, value: bool) -> ParseResult<bool> {
        self.cursor.advance()?;
        Ok(value)
    }

    // ========================================================================
    // SHARED HELPERS
    // ========================================================================

    /// Words separated by `,`.
    ///
    /// With `end_with_closing_parenthesis` the list must end in `)` and may
    /// be empty; otherwise it ends at the first word that is not a comma,
    /// which stays consumed.
    pub(crate) fn parse_comma_separated_list(
        &mut self,
        check_identifiers: bool,
        replace_properties: bool,
        end_with_closing_parenthesis: bool,
    ) -> ParseResult<Vec<String>> {
        let mut arguments = Vec::new();

        loop {
            let mut argument = self.read_word("argument")?;
            if end_with_closing_parenthesis
                && arguments.is_empty()
                && argument == CLOSE_ARGUMENTS_KEYWORD
            {
                break;
            }

            if check_identifiers {
                self.check_java_identifier(&argument, "argument type")?;
            }
            if replace_properties {
                argument = self.replace_properties(&argument)?;
            }
            arguments.push(argument);

            let expected = if end_with_closing_parenthesis {
                "separating ',' or closing ')'"
            } else {
                "separating ','"
            };
            let separator = self.read_word(expected)?;
            if separator != ARGUMENT_SEPARATOR_KEYWORD {
                if end_with_closing_parenthesis && separator != CLOSE_ARGUMENTS_KEYWORD {
                    return Err(self.error("Expecting separating ',' or closing ')' before"));
                }
                break;
            }
        }

        Ok(arguments)
    }

    /// Advance and return the new word, which must not end the directive.
    pub(crate) fn read_word(&mut self, expected: &str) -> ParseResult<String> {
        self.cursor.advance()?;
        if self.cursor.at_directive_end() {
            return Err(self.error(format!("Expecting {expected} before")));
        }
        Ok(self.current_word())
    }

    pub(crate) fn current_word(&self) -> String {
        self.cursor.peek().unwrap_or_default().to_string()
    }

    pub(crate) fn check_java_identifier(&self, word: &str, expected: &str) -> ParseResult<()> {
        if is_java_identifier_pattern(word) {
            Ok(())
        } else {
            Err(self.error(format!("Expecting {expected} before")))
        }
    }

    fn replace_properties(&self, word: &str) -> ParseResult<String> {
        self.properties
            .replace(word)
            .map_err(|err: PropertyError| self.error(format!("{err} in")))
    }

    /// Syntax error at the lookahead word.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(message, self.cursor.location())
    }

    /// Modifier error at the lookahead word.
    pub(crate) fn invalid(&self, err: ValidationError) -> ParseError {
        self.error(format!("{err} before"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
