use serde::Deserialize;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize)]
struct TemplateFile {
    resample_count: usize,
    reference_size: f64,
    templates: Vec<TemplateEntry>,
}

#[derive(Deserialize)]
struct TemplateEntry {
    name: String,
    points: Vec<[f64; 2]>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let source = manifest_dir.join("data").join("builtin_templates.json");
    println!("cargo:rerun-if-changed={}", source.display());

    let raw = fs::read_to_string(&source)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", source.display()));
    let file: TemplateFile = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", source.display()));

    let mut out = String::new();
    writeln!(out, "/// Point count of every embedded template.").unwrap();
    writeln!(
        out,
        "pub const BUILTIN_RESAMPLE_COUNT: usize = {};",
        file.resample_count
    )
    .unwrap();
    writeln!(out, "/// Reference square size the embedded templates were normalized to.").unwrap();
    writeln!(
        out,
        "pub const BUILTIN_REFERENCE_SIZE: f64 = {:?};",
        file.reference_size
    )
    .unwrap();
    writeln!(out, "/// All embedded templates, in registration order.").unwrap();
    writeln!(out, "pub const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[").unwrap();
    for t in &file.templates {
        assert_eq!(
            t.points.len(),
            file.resample_count,
            "template {} has {} points, expected {}",
            t.name,
            t.points.len(),
            file.resample_count
        );
        writeln!(out, "    BuiltinTemplate {{").unwrap();
        writeln!(out, "        name: {:?},", t.name).unwrap();
        writeln!(out, "        points: &[").unwrap();
        for [x, y] in &t.points {
            writeln!(out, "            [{x:?}, {y:?}],").unwrap();
        }
        writeln!(out, "        ],").unwrap();
        writeln!(out, "    }},").unwrap();
    }
    writeln!(out, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    fs::write(out_dir.join("builtins.rs"), out).expect("write builtins.rs");
}
