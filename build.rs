//! Build script to generate the embedded clue table
//!
//! Reads the clue file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_clue_table(
        "data/clues.txt",
        &Path::new(&out_dir).join("clues.rs"),
        "CLUES",
        "Built-in clue table as (direction, answer, prompt) triples",
    );

    // Rebuild if the clue table changes
    println!("cargo:rerun-if-changed=data/clues.txt");
}

fn generate_clue_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<(&str, &str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, '|').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(direction), Some(answer), Some(prompt)) => (direction, answer, prompt),
                _ => panic!("Malformed clue line in {input_path}: {line}"),
            }
        })
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated clue table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str)] = &[").unwrap();

    for (direction, answer, prompt) in rows {
        writeln!(output, "    ({direction:?}, {answer:?}, {prompt:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of clues in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
