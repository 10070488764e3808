//! SHROUD Test Utilities
//!
//! Centralized test infrastructure for the shroud workspace:
//! - Proptest generators for rule-model values
//! - Temporary configuration files for include tests
//! - Custom assertions for rule-model validation

pub use shroud_core::*;

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for rule-model values.
    //!
    //! Every generated [`Configuration`] is one the parser can produce, so
    //! printing and re-parsing it must give it back unchanged.

    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use shroud_core::class_util::{internal_method_descriptor, internal_type, METHOD_NAME_INIT};

    // === Flags ===

    /// Required / forbidden pair drawn from `vocabulary`, always disjoint.
    pub fn arb_access_flag_set(vocabulary: AccessFlags) -> impl Strategy<Value = AccessFlagSet> {
        (any::<u16>(), any::<u16>()).prop_map(move |(set, unset)| {
            let required_set = AccessFlags::from_bits_truncate(set) & vocabulary;
            let required_unset = (AccessFlags::from_bits_truncate(unset) & vocabulary) - required_set;
            AccessFlagSet {
                required_set,
                required_unset,
            }
        })
    }

    pub fn arb_keep_intent() -> impl Strategy<Value = KeepIntent> {
        prop_oneof![
            Just(KeepIntent::KEEP),
            Just(KeepIntent::KEEP_CLASS_MEMBERS),
            Just(KeepIntent::KEEP_CLASSES_WITH_MEMBERS),
            Just(KeepIntent::KEEP_NAMES),
            Just(KeepIntent::KEEP_CLASS_MEMBER_NAMES),
            Just(KeepIntent::KEEP_CLASSES_WITH_MEMBER_NAMES),
        ]
    }

    // === Names and types ===

    /// Internal class name such as `com/example/Widget`.
    pub fn arb_internal_class_name() -> impl Strategy<Value = String> {
        "[a-z]{1,5}(/[a-z]{1,5}){0,2}/[A-Z][a-zA-Z0-9_$]{0,6}"
    }

    /// External field or argument type, never `void`.
    pub fn arb_external_type() -> impl Strategy<Value = String> {
        let primitive = prop_oneof![
            Just("boolean"),
            Just("byte"),
            Just("char"),
            Just("short"),
            Just("int"),
            Just("long"),
            Just("float"),
            Just("double"),
        ]
        .prop_map(str::to_string);
        let class = "([a-z]{1,5}\\.){0,2}[A-Z][a-zA-Z0-9]{0,6}";

        (prop_oneof![primitive, class], 0..3usize)
            .prop_map(|(base, dimensions)| format!("{}{}", base, "[]".repeat(dimensions)))
    }

    pub fn arb_external_return_type() -> impl Strategy<Value = String> {
        prop_oneof![Just("void".to_string()), arb_external_type()]
    }

    pub fn arb_member_name() -> impl Strategy<Value = String> {
        "[a-z][a-zA-Z0-9_]{0,8}"
    }

    // === Members ===

    pub fn arb_field_spec() -> impl Strategy<Value = MemberSpec> {
        let access = || arb_access_flag_set(AccessFlags::FIELD_MODIFIERS);
        prop_oneof![
            access().prop_map(MemberSpec::any),
            (access(), arb_member_name(), arb_external_type()).prop_map(
                |(access, name, field_type)| {
                    MemberSpec::named(access, name, internal_type(&field_type))
                }
            ),
        ]
    }

    pub fn arb_method_spec() -> impl Strategy<Value = MemberSpec> {
        let access = || arb_access_flag_set(AccessFlags::METHOD_MODIFIERS);
        let arguments = || vec(arb_external_type(), 0..4);
        prop_oneof![
            access().prop_map(MemberSpec::any),
            (access(), arguments()).prop_map(|(access, arguments)| {
                MemberSpec::named(
                    access,
                    METHOD_NAME_INIT,
                    internal_method_descriptor("void", &arguments),
                )
            }),
            (access(), arb_member_name(), arb_external_return_type(), arguments()).prop_map(
                |(access, name, return_type, arguments)| {
                    MemberSpec::named(
                        access,
                        name,
                        internal_method_descriptor(&return_type, &arguments),
                    )
                }
            ),
        ]
    }

    // === Keep rules ===

    /// Comment block as the reader collects it: lines joined by `\n`.
    pub fn arb_comments() -> impl Strategy<Value = Option<String>> {
        prop::option::of(vec("[ a-zA-Z0-9#.,]{0,16}", 1..3).prop_map(|lines| lines.join("\n")))
    }

    pub fn arb_keep_spec() -> impl Strategy<Value = KeepSpec> {
        (
            arb_access_flag_set(AccessFlags::CLASS_MODIFIERS),
            prop::option::of(arb_internal_class_name()),
            prop::option::of(arb_internal_class_name()),
            prop::option::of(arb_internal_class_name()),
            arb_keep_intent(),
            arb_comments(),
            vec(arb_field_spec(), 0..3),
            vec(arb_method_spec(), 0..3),
        )
            .prop_map(
                |(
                    access,
                    class_name,
                    extends_class_name,
                    as_class_name,
                    intent,
                    comments,
                    fields,
                    methods,
                )| {
                    KeepSpec {
                        access,
                        class_name,
                        extends_class_name,
                        as_class_name,
                        intent,
                        comments,
                        fields,
                        methods,
                    }
                },
            )
    }

    // === Class paths ===

    pub fn arb_class_path_entry() -> impl Strategy<Value = ClassPathEntry> {
        (
            "[a-z]{1,8}(/[a-z]{1,8})?\\.jar",
            prop::option::of(vec("!?[a-z*/]{1,6}", 1..3).prop_map(|filters| filters.join(","))),
        )
            .prop_map(|(name, filter)| ClassPathEntry { name, filter })
    }

    pub fn arb_class_path() -> impl Strategy<Value = ClassPath> {
        vec(arb_class_path_entry(), 1..4).prop_map(ClassPath::from)
    }

    // === Configuration ===

    /// Argument of an option that may be given without one.
    pub fn arb_optional_argument() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop_oneof![Just(String::new()), "[a-z][a-z0-9_.]{0,10}"])
    }

    pub fn arb_keep_attributes() -> impl Strategy<Value = Option<Vec<String>>> {
        prop::option::of(vec("[A-Z][A-Za-z]{0,12}", 0..4))
    }

    pub fn arb_configuration() -> impl Strategy<Value = Configuration> {
        let class_paths = (
            prop::option::of(arb_class_path()),
            prop::option::of(arb_class_path()),
            prop::option::of(arb_class_path()),
            prop::option::of(arb_class_path()),
        );
        let options = (
            arb_optional_argument(),
            arb_optional_argument(),
            arb_optional_argument(),
            arb_optional_argument(),
            arb_optional_argument(),
            arb_optional_argument(),
            prop::option::of("([a-z]{1,5}(/[a-z]{1,5}){0,2})?"),
        );
        let switches = prop::array::uniform9(any::<bool>());

        (
            class_paths,
            vec(arb_keep_spec(), 0..4),
            arb_keep_attributes(),
            options,
            switches,
        )
            .prop_map(
                |(
                    (in_jars, out_jars, library_jars, resource_jars),
                    keep,
                    keep_attributes,
                    (
                        new_source_file_attribute,
                        print_seeds,
                        print_usage,
                        print_mapping,
                        apply_mapping,
                        dump,
                        default_package,
                    ),
                    switches,
                )| {
                    Configuration {
                        in_jars,
                        out_jars,
                        library_jars,
                        resource_jars,
                        keep,
                        keep_attributes,
                        new_source_file_attribute,
                        print_seeds,
                        print_usage,
                        print_mapping,
                        apply_mapping,
                        dump,
                        default_package,
                        verbose: switches[0],
                        ignore_warnings: switches[1],
                        warn: switches[2],
                        note: switches[3],
                        shrink: switches[4],
                        obfuscate: switches[5],
                        use_mixed_case_class_names: switches[6],
                        overload_aggressively: switches[7],
                        skip_non_public_library_classes: switches[8],
                    }
                },
            )
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built configurations and temporary configuration files.

    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A typical application configuration exercising most directives.
    pub const SAMPLE_CONFIG: &str = "\
-injars app.jar(!META-INF/**)
-outjars app-shrunk.jar
-libraryjars rt.jar
-keepattributes SourceFile,LineNumberTable
-printmapping app.map
-dontnote

# Application entry point
-keep public class com.example.Main {
    public static void main(java.lang.String[]);
}

-keepclasseswithmembernames class * {
    native <methods>;
}

-keepclassmembers class * implements java.io.Serializable {
    static final long serialVersionUID;
    <init>();
}
";

    /// A directory of configuration files deleted on drop.
    pub struct ConfigDir {
        dir: TempDir,
    }

    impl ConfigDir {
        pub fn new() -> Self {
            Self {
                dir: tempfile::tempdir().expect("create temporary config dir"),
            }
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        /// Write `content` to `name` inside the directory.
        pub fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, content).expect("write config file");
            path
        }
    }

    impl Default for ConfigDir {
        fn default() -> Self {
            Self::new()
        }
    }

    /// The model [`SAMPLE_CONFIG`] parses into.
    pub fn sample_configuration() -> Configuration {
        let mut public = AccessFlagSet::new();
        public.require(AccessFlags::PUBLIC, true).expect("disjoint flags");
        let mut public_static = public;
        public_static.require(AccessFlags::STATIC, true).expect("disjoint flags");
        let mut native = AccessFlagSet::new();
        native.require(AccessFlags::NATIVE, true).expect("disjoint flags");
        let mut static_final = AccessFlagSet::new();
        static_final.require(AccessFlags::STATIC, true).expect("disjoint flags");
        static_final.require(AccessFlags::FINAL, true).expect("disjoint flags");

        let mut main = KeepSpec::new(Some("com/example/Main".to_string()), KeepIntent::KEEP)
            .with_access(public)
            .with_comments(Some(" Application entry point".to_string()));
        main.add_method(MemberSpec::named(public_static, "main", "([Ljava/lang/String;)V"));

        let mut natives = KeepSpec::new(None, KeepIntent::KEEP_CLASSES_WITH_MEMBER_NAMES);
        natives.add_method(MemberSpec::any(native));

        let mut serializable = KeepSpec::new(None, KeepIntent::KEEP_CLASS_MEMBERS)
            .with_extends("java/io/Serializable");
        serializable.add_field(MemberSpec::named(static_final, "serialVersionUID", "J"));
        serializable.add_method(MemberSpec::named(AccessFlagSet::new(), "<init>", "()V"));

        Configuration {
            in_jars: Some(ClassPath::from(vec![
                ClassPathEntry::new("app.jar").with_filter("!META-INF/**")
            ])),
            out_jars: Some(ClassPath::from(vec![ClassPathEntry::new("app-shrunk.jar")])),
            library_jars: Some(ClassPath::from(vec![ClassPathEntry::new("rt.jar")])),
            keep_attributes: Some(vec!["SourceFile".to_string(), "LineNumberTable".to_string()]),
            print_mapping: Some("app.map".to_string()),
            note: false,
            keep: vec![main, natives, serializable],
            ..Configuration::default()
        }
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertion helpers for rule-model validation.

    use super::*;

    /// Assert that no flag is both required and forbidden.
    #[track_caller]
    pub fn assert_disjoint(access: &AccessFlagSet) {
        assert!(
            (access.required_set & access.required_unset).is_empty(),
            "Flags both required and forbidden: {:?}",
            access
        );
    }

    /// Assert that a keep rule names `internal_name` and return it.
    #[track_caller]
    pub fn assert_keeps_class<'a>(config: &'a Configuration, internal_name: &str) -> &'a KeepSpec {
        match config
            .keep
            .iter()
            .find(|spec| spec.class_name.as_deref() == Some(internal_name))
        {
            Some(spec) => spec,
            None => panic!("No keep rule for {}, got: {:?}", internal_name, config.keep),
        }
    }

    /// Assert class path entries as `(name, filter)` pairs, in order.
    #[track_caller]
    pub fn assert_class_path(class_path: Option<&ClassPath>, expected: &[(&str, Option<&str>)]) {
        let actual: Vec<(&str, Option<&str>)> = class_path
            .map(|class_path| {
                class_path
                    .iter()
                    .map(|entry| (entry.name.as_str(), entry.filter.as_deref()))
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(actual, expected, "Class path mismatch");
    }

    /// Assert that every flag set in a configuration is disjoint.
    #[track_caller]
    pub fn assert_all_disjoint(config: &Configuration) {
        for spec in &config.keep {
            assert_disjoint(&spec.access);
            for member in spec.fields.iter().chain(&spec.methods) {
                assert_disjoint(&member.access);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::assertions::*;
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_generated_configurations_are_disjoint(config in arb_configuration()) {
            assert_all_disjoint(&config);
        }

        #[test]
        fn prop_generated_members_respect_vocabularies(
            field in arb_field_spec(),
            method in arb_method_spec(),
        ) {
            prop_assert!(field.access.check_field().is_ok());
            prop_assert!(method.access.check_method().is_ok());
        }
    }

    #[test]
    fn test_sample_configuration_is_disjoint() {
        let config = super::fixtures::sample_configuration();
        assert_all_disjoint(&config);
        assert_keeps_class(&config, "com/example/Main");
    }
}
