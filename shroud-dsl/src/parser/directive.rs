//! Top-level directives and their dispatch table

use crate::lexer::AT_DIRECTIVE;
use shroud_core::KeepIntent;

pub const INCLUDE_DIRECTIVE: &str = "-include";
pub const LIBRARY_JARS_OPTION: &str = "-libraryjars";
pub const IN_JARS_OPTION: &str = "-injars";
pub const RESOURCE_JARS_OPTION: &str = "-resourcejars";
pub const OUT_JARS_OPTION: &str = "-outjars";
pub const KEEP_OPTION: &str = "-keep";
pub const KEEP_CLASS_MEMBERS_OPTION: &str = "-keepclassmembers";
pub const KEEP_CLASSES_WITH_MEMBERS_OPTION: &str = "-keepclasseswithmembers";
pub const KEEP_NAMES_OPTION: &str = "-keepnames";
pub const KEEP_CLASS_MEMBER_NAMES_OPTION: &str = "-keepclassmembernames";
pub const KEEP_CLASSES_WITH_MEMBER_NAMES_OPTION: &str = "-keepclasseswithmembernames";
pub const KEEP_ATTRIBUTES_OPTION: &str = "-keepattributes";
pub const RENAME_SOURCE_FILE_ATTRIBUTE_OPTION: &str = "-renamesourcefileattribute";
pub const PRINT_SEEDS_OPTION: &str = "-printseeds";
pub const PRINT_USAGE_OPTION: &str = "-printusage";
pub const PRINT_MAPPING_OPTION: &str = "-printmapping";
pub const APPLY_MAPPING_OPTION: &str = "-applymapping";
pub const VERBOSE_OPTION: &str = "-verbose";
pub const DUMP_OPTION: &str = "-dump";
pub const IGNORE_WARNINGS_OPTION: &str = "-ignorewarnings";
pub const DONT_WARN_OPTION: &str = "-dontwarn";
pub const DONT_NOTE_OPTION: &str = "-dontnote";
pub const DONT_SHRINK_OPTION: &str = "-dontshrink";
pub const DONT_OBFUSCATE_OPTION: &str = "-dontobfuscate";
pub const DONT_USE_MIXED_CASE_CLASS_NAMES_OPTION: &str = "-dontusemixedcaseclassnames";
pub const OVERLOAD_AGGRESSIVELY_OPTION: &str = "-overloadaggressively";
pub const DEFAULT_PACKAGE_OPTION: &str = "-defaultpackage";
pub const DONT_SKIP_NON_PUBLIC_LIBRARY_CLASSES_OPTION: &str = "-dontskipnonpubliclibraryclasses";

/// What a top-level word asks the parser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Include,
    LibraryJars,
    InJars,
    ResourceJars,
    OutJars,
    Keep(KeepIntent),
    KeepAttributes,
    RenameSourceFileAttribute,
    PrintSeeds,
    PrintUsage,
    PrintMapping,
    ApplyMapping,
    Verbose,
    Dump,
    IgnoreWarnings,
    DontWarn,
    DontNote,
    DontShrink,
    DontObfuscate,
    DontUseMixedCaseClassNames,
    OverloadAggressively,
    DefaultPackage,
    DontSkipNonPublicLibraryClasses,
}

/// Directives in matching order. A word selects the first keyword it is a
/// prefix of, so `-keep` wins over its longer variants and abbreviations such
/// as `-dontob` are accepted.
pub const DIRECTIVES: [(&str, Directive); 29] = [
    (AT_DIRECTIVE, Directive::Include),
    (INCLUDE_DIRECTIVE, Directive::Include),
    (LIBRARY_JARS_OPTION, Directive::LibraryJars),
    (IN_JARS_OPTION, Directive::InJars),
    (RESOURCE_JARS_OPTION, Directive::ResourceJars),
    (OUT_JARS_OPTION, Directive::OutJars),
    (KEEP_OPTION, Directive::Keep(KeepIntent::KEEP)),
    (KEEP_CLASS_MEMBERS_OPTION, Directive::Keep(KeepIntent::KEEP_CLASS_MEMBERS)),
    (
        KEEP_CLASSES_WITH_MEMBERS_OPTION,
        Directive::Keep(KeepIntent::KEEP_CLASSES_WITH_MEMBERS),
    ),
    (KEEP_NAMES_OPTION, Directive::Keep(KeepIntent::KEEP_NAMES)),
    (
        KEEP_CLASS_MEMBER_NAMES_OPTION,
        Directive::Keep(KeepIntent::KEEP_CLASS_MEMBER_NAMES),
    ),
    (
        KEEP_CLASSES_WITH_MEMBER_NAMES_OPTION,
        Directive::Keep(KeepIntent::KEEP_CLASSES_WITH_MEMBER_NAMES),
    ),
    (KEEP_ATTRIBUTES_OPTION, Directive::KeepAttributes),
    (
        RENAME_SOURCE_FILE_ATTRIBUTE_OPTION,
        Directive::RenameSourceFileAttribute,
    ),
    (PRINT_SEEDS_OPTION, Directive::PrintSeeds),
    (PRINT_USAGE_OPTION, Directive::PrintUsage),
    (PRINT_MAPPING_OPTION, Directive::PrintMapping),
    (APPLY_MAPPING_OPTION, Directive::ApplyMapping),
    (VERBOSE_OPTION, Directive::Verbose),
    (DUMP_OPTION, Directive::Dump),
    (IGNORE_WARNINGS_OPTION, Directive::IgnoreWarnings),
    (DONT_WARN_OPTION, Directive::DontWarn),
    (DONT_NOTE_OPTION, Directive::DontNote),
    (DONT_SHRINK_OPTION, Directive::DontShrink),
    (DONT_OBFUSCATE_OPTION, Directive::DontObfuscate),
    (
        DONT_USE_MIXED_CASE_CLASS_NAMES_OPTION,
        Directive::DontUseMixedCaseClassNames,
    ),
    (OVERLOAD_AGGRESSIVELY_OPTION, Directive::OverloadAggressively),
    (DEFAULT_PACKAGE_OPTION, Directive::DefaultPackage),
    (
        DONT_SKIP_NON_PUBLIC_LIBRARY_CLASSES_OPTION,
        Directive::DontSkipNonPublicLibraryClasses,
    ),
];

impl Directive {
    /// Find the directive `word` abbreviates, with its full keyword.
    pub fn lookup(word: &str) -> Option<(&'static str, Directive)> {
        if word.is_empty() {
            return None;
        }
        DIRECTIVES
            .iter()
            .find(|(keyword, _)| keyword.starts_with(word))
            .copied()
    }

    /// The keyword that introduces a keep rule with `intent`.
    ///
    /// Conditional marking takes precedence, so an intent that also sets
    /// `mark_classes` prints as a `-keepclasseswith...` variant.
    pub fn keep_keyword(intent: KeepIntent) -> &'static str {
        match (
            intent.mark_classes_conditionally,
            intent.mark_classes,
            intent.only_keep_names,
        ) {
            (true, _, false) => KEEP_CLASSES_WITH_MEMBERS_OPTION,
            (true, _, true) => KEEP_CLASSES_WITH_MEMBER_NAMES_OPTION,
            (false, true, false) => KEEP_OPTION,
            (false, true, true) => KEEP_NAMES_OPTION,
            (false, false, false) => KEEP_CLASS_MEMBERS_OPTION,
            (false, false, true) => KEEP_CLASS_MEMBER_NAMES_OPTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(word: &str) -> Option<Directive> {
        Directive::lookup(word).map(|(_, directive)| directive)
    }

    #[test]
    fn test_exact_keywords() {
        for (keyword, expected) in DIRECTIVES {
            assert_eq!(Directive::lookup(keyword), Some((keyword, expected)));
        }
    }

    #[test]
    fn test_prefix_dispatch() {
        assert_eq!(directive("-keep"), Some(Directive::Keep(KeepIntent::KEEP)));
        assert_eq!(
            directive("-keepclassm"),
            Some(Directive::Keep(KeepIntent::KEEP_CLASS_MEMBERS))
        );
        assert_eq!(
            directive("-keepclassmembern"),
            Some(Directive::Keep(KeepIntent::KEEP_CLASS_MEMBER_NAMES))
        );
        assert_eq!(directive("-dontob"), Some(Directive::DontObfuscate));
        assert_eq!(directive("-i"), Some(Directive::Include));
        assert_eq!(directive("-inj"), Some(Directive::InJars));
        assert_eq!(directive("-d"), Some(Directive::Dump));
        assert_eq!(directive("-"), Some(Directive::Include));
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(directive("-keepall"), None);
        assert_eq!(directive("-verbosely"), None);
        assert_eq!(directive("keep"), None);
        assert_eq!(directive(""), None);
    }

    #[test]
    fn test_keep_keyword_round_trips_intents() {
        for intent in [
            KeepIntent::KEEP,
            KeepIntent::KEEP_CLASS_MEMBERS,
            KeepIntent::KEEP_CLASSES_WITH_MEMBERS,
            KeepIntent::KEEP_NAMES,
            KeepIntent::KEEP_CLASS_MEMBER_NAMES,
            KeepIntent::KEEP_CLASSES_WITH_MEMBER_NAMES,
        ] {
            let keyword = Directive::keep_keyword(intent);
            assert_eq!(directive(keyword), Some(Directive::Keep(intent)));
        }
    }
}
