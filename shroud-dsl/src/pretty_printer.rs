//! Pretty printer: renders a configuration back into directive text
//!
//! Parsing the printed text of a parsed configuration yields an equal
//! configuration. Intents the grammar cannot produce (conditional marking
//! together with `mark_classes`) print as their conditional variant, and a
//! member with only one of name and descriptor prints as a wildcard.

use crate::error::ParseResult;
use crate::lexer::*;
use crate::parser::*;
use shroud_core::class_util::{
    external_class_name, external_method_return_type_and_arguments, external_type, TYPE_VOID,
};
use shroud_core::{
    AccessFlagSet, AccessFlags, ClassPath, Configuration, KeepSpec, MemberSpec, ParserSettings,
    DEFAULT_PATH_SEPARATOR,
};
use std::fmt::{self, Write};

/// Render `config` using the platform class path separator.
pub fn pretty_print(config: &Configuration) -> String {
    pretty_print_with_separator(config, DEFAULT_PATH_SEPARATOR)
}

pub fn pretty_print_with_separator(config: &Configuration, path_separator: char) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = Printer { output: &mut output, path_separator }.configuration(config);
    output
}

/// Parse `text` and print it again.
pub fn round_trip(text: &str, settings: &ParserSettings) -> ParseResult<String> {
    let mut config = Configuration::default();
    ConfigurationParser::from_text("round trip", text, settings)?.parse(&mut config)?;
    Ok(pretty_print_with_separator(&config, settings.path_separator))
}

struct Printer<'a> {
    output: &'a mut String,
    path_separator: char,
}

impl Printer<'_> {
    fn configuration(&mut self, config: &Configuration) -> fmt::Result {
        let class_paths = [
            (IN_JARS_OPTION, &config.in_jars),
            (OUT_JARS_OPTION, &config.out_jars),
            (LIBRARY_JARS_OPTION, &config.library_jars),
            (RESOURCE_JARS_OPTION, &config.resource_jars),
        ];
        for (option, class_path) in class_paths {
            if let Some(class_path) = class_path {
                self.class_path(option, class_path)?;
            }
        }

        if let Some(attributes) = &config.keep_attributes {
            if attributes.is_empty() {
                writeln!(self.output, "{KEEP_ATTRIBUTES_OPTION} {ANY_ATTRIBUTE_KEYWORD}")?;
            } else {
                writeln!(
                    self.output,
                    "{KEEP_ATTRIBUTES_OPTION} {}",
                    attributes.join(ATTRIBUTE_SEPARATOR_KEYWORD)
                )?;
            }
        }

        let default_package = config.default_package.as_deref().map(external_class_name);
        let options = [
            (RENAME_SOURCE_FILE_ATTRIBUTE_OPTION, config.new_source_file_attribute.as_deref()),
            (PRINT_SEEDS_OPTION, config.print_seeds.as_deref()),
            (PRINT_USAGE_OPTION, config.print_usage.as_deref()),
            (PRINT_MAPPING_OPTION, config.print_mapping.as_deref()),
            (APPLY_MAPPING_OPTION, config.apply_mapping.as_deref()),
            (DUMP_OPTION, config.dump.as_deref()),
            (DEFAULT_PACKAGE_OPTION, default_package.as_deref()),
        ];
        for (option, argument) in options {
            match argument {
                Some("") => writeln!(self.output, "{option}")?,
                Some(argument) => writeln!(self.output, "{option} {argument}")?,
                None => {}
            }
        }

        let switches = [
            (VERBOSE_OPTION, config.verbose),
            (IGNORE_WARNINGS_OPTION, config.ignore_warnings),
            (DONT_WARN_OPTION, !config.warn),
            (DONT_NOTE_OPTION, !config.note),
            (DONT_SHRINK_OPTION, !config.shrink),
            (DONT_OBFUSCATE_OPTION, !config.obfuscate),
            (DONT_USE_MIXED_CASE_CLASS_NAMES_OPTION, !config.use_mixed_case_class_names),
            (OVERLOAD_AGGRESSIVELY_OPTION, config.overload_aggressively),
            (
                DONT_SKIP_NON_PUBLIC_LIBRARY_CLASSES_OPTION,
                !config.skip_non_public_library_classes,
            ),
        ];
        for (option, enabled) in switches {
            if enabled {
                writeln!(self.output, "{option}")?;
            }
        }

        for spec in &config.keep {
            self.keep(spec)?;
        }
        Ok(())
    }

    fn class_path(&mut self, option: &str, class_path: &ClassPath) -> fmt::Result {
        write!(self.output, "{option} ")?;
        for (index, entry) in class_path.iter().enumerate() {
            if index > 0 {
                self.output.push(self.path_separator);
            }
            self.output.push_str(&entry.name);
            if let Some(filter) = &entry.filter {
                write!(self.output, "({filter})")?;
            }
        }
        writeln!(self.output)
    }

    fn keep(&mut self, spec: &KeepSpec) -> fmt::Result {
        if let Some(comments) = &spec.comments {
            for line in comments.split('\n') {
                writeln!(self.output, "{COMMENT_CHARACTER}{line}")?;
            }
        }

        write!(self.output, "{}", Directive::keep_keyword(spec.intent))?;

        let class_flags = AccessFlagSet {
            required_set: spec.access.required_set - AccessFlags::INTERFACE,
            required_unset: spec.access.required_unset - AccessFlags::INTERFACE,
        };
        self.modifiers(&class_flags)?;
        if spec.access.required_set.contains(AccessFlags::INTERFACE) {
            write!(self.output, " {INTERFACE_KEYWORD}")?;
        } else if spec.access.required_unset.contains(AccessFlags::INTERFACE) {
            write!(self.output, " {NEGATOR_KEYWORD}{INTERFACE_KEYWORD}")?;
        } else {
            write!(self.output, " {CLASS_KEYWORD}")?;
        }

        match &spec.class_name {
            Some(name) => write!(self.output, " {}", external_class_name(name))?,
            None => write!(self.output, " {ANY_CLASS_KEYWORD}")?,
        }
        if let Some(name) = &spec.extends_class_name {
            write!(self.output, " {EXTENDS_KEYWORD} {}", external_class_name(name))?;
        }
        if let Some(name) = &spec.as_class_name {
            write!(self.output, " {AS_KEYWORD} {}", external_class_name(name))?;
        }

        if !spec.has_members() {
            return writeln!(self.output);
        }

        writeln!(self.output, " {OPEN_KEYWORD}")?;
        for field in &spec.fields {
            self.field(field)?;
        }
        for method in &spec.methods {
            self.method(method)?;
        }
        writeln!(self.output, "{CLOSE_KEYWORD}")
    }

    fn field(&mut self, field: &MemberSpec) -> fmt::Result {
        write!(self.output, "   ")?;
        self.modifiers(&field.access)?;
        match (&field.name, &field.descriptor) {
            (Some(name), Some(descriptor)) => {
                let field_type = external_type(descriptor).unwrap_or_else(|| descriptor.clone());
                writeln!(self.output, " {field_type} {name}{SEPARATOR_KEYWORD}")
            }
            _ => writeln!(self.output, " {ANY_FIELD_KEYWORD}{SEPARATOR_KEYWORD}"),
        }
    }

    fn method(&mut self, method: &MemberSpec) -> fmt::Result {
        write!(self.output, "   ")?;
        self.modifiers(&method.access)?;
        let signature = method
            .descriptor
            .as_deref()
            .and_then(external_method_return_type_and_arguments);
        match (&method.name, signature) {
            (Some(name), Some((return_type, arguments)))
                if method.is_constructor() && return_type == TYPE_VOID =>
            {
                writeln!(
                    self.output,
                    " {name}{OPEN_ARGUMENTS_KEYWORD}{}{CLOSE_ARGUMENTS_KEYWORD}{SEPARATOR_KEYWORD}",
                    arguments.join(ARGUMENT_SEPARATOR_KEYWORD)
                )
            }
            (Some(name), Some((return_type, arguments))) => writeln!(
                self.output,
                " {return_type} {name}{OPEN_ARGUMENTS_KEYWORD}{}{CLOSE_ARGUMENTS_KEYWORD}{SEPARATOR_KEYWORD}",
                arguments.join(ARGUMENT_SEPARATOR_KEYWORD)
            ),
            _ => writeln!(self.output, " {ANY_METHOD_KEYWORD}{SEPARATOR_KEYWORD}"),
        }
    }

    /// Required modifiers, then forbidden ones, each preceded by a space.
    fn modifiers(&mut self, access: &AccessFlagSet) -> fmt::Result {
        for keyword in access.required_set.keywords() {
            write!(self.output, " {keyword}")?;
        }
        for keyword in access.required_unset.keywords() {
            write!(self.output, " {NEGATOR_KEYWORD}{keyword}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use shroud_core::{ClassPathEntry, KeepIntent};

    fn settings() -> ParserSettings {
        ParserSettings::default().with_path_separator(':')
    }

    fn parse(text: &str) -> Result<Configuration, ParseError> {
        let mut config = Configuration::default();
        ConfigurationParser::from_text("test.pro", text, &settings())?.parse(&mut config)?;
        Ok(config)
    }

    #[test]
    fn test_pretty_print_default_is_empty() {
        assert_eq!(pretty_print(&Configuration::default()), "");
    }

    #[test]
    fn test_pretty_print_class_path_and_switches() {
        let mut config = Configuration::default();
        config.in_jars = Some(ClassPath::from(vec![
            ClassPathEntry::new("a.jar"),
            ClassPathEntry::new("b.jar").with_filter("**.class,!**.txt"),
        ]));
        config.shrink = false;
        config.print_mapping = Some(String::new());

        let output = pretty_print_with_separator(&config, ':');
        assert!(output.contains("-injars a.jar:b.jar(**.class,!**.txt)\n"));
        assert!(output.contains("-dontshrink\n"));
        assert!(output.contains("-printmapping\n"));
        assert!(!output.contains("-dontobfuscate"));
    }

    #[test]
    fn test_pretty_print_keep_rule() {
        let mut access = AccessFlagSet::new();
        access.require(AccessFlags::PUBLIC, true).unwrap();
        let mut spec = KeepSpec::new(Some("com/foo/Bar".to_string()), KeepIntent::KEEP_NAMES)
            .with_access(access)
            .with_comments(Some(" why".to_string()));
        spec.add_field(MemberSpec::named(AccessFlagSet::new(), "count", "I"));
        spec.add_method(MemberSpec::named(access, "<init>", "(Ljava/lang/String;)V"));
        spec.add_method(MemberSpec::any(AccessFlagSet::new()));

        let mut config = Configuration::default();
        config.keep.push(spec);

        assert_eq!(
            pretty_print(&config),
            "# why\n\
             -keepnames public class com.foo.Bar {\n    \
             int count;\n    \
             public <init>(java.lang.String);\n    \
             <methods>;\n\
             }\n"
        );
    }

    #[test]
    fn test_pretty_print_interface_modifiers() {
        let mut access = AccessFlagSet::new();
        access.require(AccessFlags::INTERFACE, false).unwrap();
        access.require(AccessFlags::FINAL, false).unwrap();
        let spec = KeepSpec::new(None, KeepIntent::KEEP).with_access(access);

        let mut config = Configuration::default();
        config.keep.push(spec);
        assert_eq!(pretty_print(&config), "-keep !final !interface *\n");
    }

    #[test]
    fn test_round_trip_is_stable() -> Result<(), ParseError> {
        let text = "\
            -injars in.jar(!**.txt):lib.jar\n\
            -outjars out.jar\n\
            -keepattributes SourceFile,LineNumberTable\n\
            -printseeds\n\
            -defaultpackage com.shrunk\n\
            -dontnote\n\
            # entry point\n\
            -keep public class com.foo.Main { public static void main(java.lang.String[]); }\n\
            -keepclasseswithmembernames class * { native <methods>; }\n\
            -keepclassmembers !abstract class * extends java.lang.Enum { *; }\n";

        let printed = round_trip(text, &settings())?;
        assert_eq!(parse(&printed)?, parse(text)?);
        assert_eq!(round_trip(&printed, &settings())?, printed);
        Ok(())
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use shroud_test_utils::generators::arb_configuration;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_parse_of_printed_configuration_is_equal(config in arb_configuration()) {
            let settings = ParserSettings::default().with_path_separator(':');
            let printed = pretty_print_with_separator(&config, ':');

            let mut parsed = Configuration::default();
            ConfigurationParser::from_text("printed.pro", &printed, &settings)
                .and_then(|mut parser| parser.parse(&mut parsed))
                .map_err(|err| TestCaseError::fail(format!("{err}\n{printed}")))?;

            prop_assert_eq!(parsed, config);
        }
    }
}
