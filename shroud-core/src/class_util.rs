//! Conversions between external (source-like) and internal class names, types
//! and method descriptors.
//!
//! External: `java.lang.String[]`, `int`, `void`.
//! Internal: `[Ljava/lang/String;`, `I`, `V`.
//!
//! Wildcard characters (`*`, `?`) pass through untouched, so patterns convert
//! the same way plain names do.

/// Reserved internal name of instance initializers.
pub const METHOD_NAME_INIT: &str = "<init>";

/// External name of the void type.
pub const TYPE_VOID: &str = "void";

const EXTERNAL_ARRAY: &str = "[]";
const INTERNAL_ARRAY: char = '[';
const INTERNAL_CLASS_START: char = 'L';
const INTERNAL_CLASS_END: char = ';';

const PRIMITIVES: [(&str, char); 9] = [
    ("void", 'V'),
    ("boolean", 'Z'),
    ("byte", 'B'),
    ("char", 'C'),
    ("short", 'S'),
    ("int", 'I'),
    ("long", 'J'),
    ("float", 'F'),
    ("double", 'D'),
];

/// `com.example.Foo` -> `com/example/Foo`.
pub fn internal_class_name(external_class_name: &str) -> String {
    external_class_name.replace('.', "/")
}

/// `com/example/Foo` -> `com.example.Foo`.
pub fn external_class_name(internal_class_name: &str) -> String {
    internal_class_name.replace('/', ".")
}

/// `com.example.Foo` -> `Foo`.
pub fn external_short_class_name(external_class_name: &str) -> &str {
    match external_class_name.rfind('.') {
        Some(index) => &external_class_name[index + 1..],
        None => external_class_name,
    }
}

/// External type to internal type: `int[][]` -> `[[I`, `a.B` -> `La/B;`.
pub fn internal_type(external_type: &str) -> String {
    let mut base = external_type;
    let mut dimensions = 0;
    while let Some(stripped) = base.strip_suffix(EXTERNAL_ARRAY) {
        base = stripped;
        dimensions += 1;
    }

    let mut internal = String::with_capacity(base.len() + dimensions + 2);
    for _ in 0..dimensions {
        internal.push(INTERNAL_ARRAY);
    }

    match PRIMITIVES.iter().find(|(name, _)| *name == base) {
        Some((_, code)) => internal.push(*code),
        None => {
            internal.push(INTERNAL_CLASS_START);
            internal.push_str(&internal_class_name(base));
            internal.push(INTERNAL_CLASS_END);
        }
    }

    internal
}

/// Internal type to external type: `[Ljava/lang/String;` -> `java.lang.String[]`.
///
/// Returns `None` when the string is not exactly one internal type.
pub fn external_type(internal_type: &str) -> Option<String> {
    let (external, rest) = split_internal_type(internal_type)?;
    rest.is_empty().then_some(external)
}

/// Build `(args)ret` from external return and argument types.
pub fn internal_method_descriptor<S: AsRef<str>>(return_type: &str, arguments: &[S]) -> String {
    let mut descriptor = String::from("(");
    for argument in arguments {
        descriptor.push_str(&internal_type(argument.as_ref()));
    }
    descriptor.push(')');
    descriptor.push_str(&internal_type(return_type));
    descriptor
}

/// Split a method descriptor into its external return type and argument types.
pub fn external_method_return_type_and_arguments(
    descriptor: &str,
) -> Option<(String, Vec<String>)> {
    let mut rest = descriptor.strip_prefix('(')?;
    let mut arguments = Vec::new();

    while !rest.starts_with(')') {
        let (argument, remaining) = split_internal_type(rest)?;
        arguments.push(argument);
        rest = remaining;
    }

    let return_type = external_type(&rest[1..])?;
    Some((return_type, arguments))
}

/// Whether `word` is a Java identifier, possibly qualified, possibly an array
/// type, possibly containing the wildcards `*` and `?`.
pub fn is_java_identifier_pattern(word: &str) -> bool {
    word.chars().all(|c| {
        is_java_identifier_part(c) || matches!(c, '.' | '[' | ']' | '<' | '>' | '*' | '?')
    })
}

/// Java's identifier-part test: letters, decimal digits, connecting
/// punctuation, currency symbols, combining marks and ignorable controls.
/// Other numerics such as superscripts and fractions are excluded.
pub fn is_java_identifier_part(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric()
            || c == '_'
            || c == '$'
            || matches!(c, '\u{0}'..='\u{8}' | '\u{e}'..='\u{1b}' | '\u{7f}');
    }
    if c.is_numeric() {
        return c.is_alphabetic() || is_decimal_digit(c);
    }
    c.is_alphabetic()
        || in_ranges(c, CONNECTING_PUNCTUATION)
        || in_ranges(c, CURRENCY_SYMBOLS)
        || in_ranges(c, COMBINING_MARKS)
        || in_ranges(c, IGNORABLE)
}

/// First code point of each run of ten decimal digits outside ASCII.
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450,
    0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x1E950,
];

const CONNECTING_PUNCTUATION: &[(char, char)] = &[
    ('\u{203F}', '\u{2040}'),
    ('\u{2054}', '\u{2054}'),
    ('\u{FE33}', '\u{FE34}'),
    ('\u{FE4D}', '\u{FE4F}'),
    ('\u{FF3F}', '\u{FF3F}'),
];

const CURRENCY_SYMBOLS: &[(char, char)] = &[
    ('\u{A2}', '\u{A5}'),
    ('\u{58F}', '\u{58F}'),
    ('\u{60B}', '\u{60B}'),
    ('\u{9F2}', '\u{9F3}'),
    ('\u{9FB}', '\u{9FB}'),
    ('\u{AF1}', '\u{AF1}'),
    ('\u{BF9}', '\u{BF9}'),
    ('\u{E3F}', '\u{E3F}'),
    ('\u{17DB}', '\u{17DB}'),
    ('\u{20A0}', '\u{20C0}'),
    ('\u{A838}', '\u{A838}'),
    ('\u{FDFC}', '\u{FDFC}'),
    ('\u{FE69}', '\u{FE69}'),
    ('\u{FF04}', '\u{FF04}'),
    ('\u{FFE0}', '\u{FFE1}'),
    ('\u{FFE5}', '\u{FFE6}'),
];

const COMBINING_MARKS: &[(char, char)] = &[
    ('\u{300}', '\u{36F}'),
    ('\u{483}', '\u{487}'),
    ('\u{591}', '\u{5BD}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20F0}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{FE20}', '\u{FE2F}'),
];

const IGNORABLE: &[(char, char)] = &[
    ('\u{80}', '\u{9F}'),
    ('\u{AD}', '\u{AD}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{FEFF}', '\u{FEFF}'),
];

fn is_decimal_digit(c: char) -> bool {
    let code = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .any(|&zero| (zero..zero + 10).contains(&code))
}

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(low, high)| (low..=high).contains(&c))
}

/// Parse one internal type off the front of `input`, returning its external
/// form and the unparsed remainder.
fn split_internal_type(input: &str) -> Option<(String, &str)> {
    let dimensions = input.chars().take_while(|c| *c == INTERNAL_ARRAY).count();
    let rest = &input[dimensions..];
    let code = rest.chars().next()?;

    let (mut external, remaining) = if code == INTERNAL_CLASS_START {
        let end = rest.find(INTERNAL_CLASS_END)?;
        (external_class_name(&rest[1..end]), &rest[end + 1..])
    } else {
        let (name, _) = PRIMITIVES.iter().find(|(_, c)| *c == code)?;
        (name.to_string(), &rest[1..])
    };

    for _ in 0..dimensions {
        external.push_str(EXTERNAL_ARRAY);
    }
    Some((external, remaining))
}

// =============================================================================
// TESTS
// =============================================================================
