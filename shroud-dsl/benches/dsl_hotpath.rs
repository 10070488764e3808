use criterion::{criterion_group, criterion_main, Criterion};
use shroud_core::{Configuration, ParserSettings};
use shroud_dsl::{pretty_print, ConfigurationParser};
use std::hint::black_box;

const CONFIG_MIN: &str = r#"
-injars in.jar(!META-INF/**):lib/extra.jar
-outjars out.jar
-libraryjars rt.jar
-keepattributes SourceFile,LineNumberTable
-printmapping out.map

# Application entry point
-keep public class com.example.Main {
    public static void main(java.lang.String[]);
}

-keepclasseswithmembernames class * {
    native <methods>;
}

-keepclassmembers class * extends java.lang.Enum {
    public static **[] values();
    public static ** valueOf(java.lang.String);
}

-keep class * implements java.io.Serializable {
    static final long serialVersionUID;
    private void writeObject(java.io.ObjectOutputStream);
    private void readObject(java.io.ObjectInputStream);
    <init>();
}
"#;

fn parse(text: &str) -> Configuration {
    let settings = ParserSettings::default().with_path_separator(':');
    let mut config = Configuration::default();
    ConfigurationParser::from_text("bench.pro", text, &settings)
        .and_then(|mut parser| parser.parse(&mut config))
        .expect("parse configuration");
    config
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("dsl/parse_min", |b| {
        b.iter(|| {
            let config = parse(black_box(CONFIG_MIN));
            black_box(config.keep.len());
        });
    });
}

fn bench_pretty_print(c: &mut Criterion) {
    let config = parse(CONFIG_MIN);
    c.bench_function("dsl/pretty_print_min", |b| {
        b.iter(|| black_box(pretty_print(black_box(&config))));
    });
}

criterion_group!(benches, bench_parse, bench_pretty_print);
criterion_main!(benches);
