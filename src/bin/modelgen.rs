//! Batch converter: reads the model catalog and writes the generated
//! TypeScript module.
//!
//! Input and output paths are fixed constants; there is no argument
//! handling. Progress goes to stdout, failures to stderr with a non-zero
//! exit.

use std::path::Path;
use std::process;

const INPUT_PATH: &str = "data/llm.md";
const OUTPUT_PATH: &str = "models_generated.ts";

fn main() {
    println!("Parsing {}...", INPUT_PATH);

    let records = modelgen::convert_file(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });

    println!("Models found: {}", records.len());
    println!("Module written to {}", OUTPUT_PATH);

    // Preview of the first records, as JSON for readability.
    let preview = &records[..records.len().min(3)];
    match serde_json::to_string_pretty(preview) {
        Ok(json) => println!("First records:\n{}", json),
        Err(e) => eprintln!("preview unavailable: {}", e),
    }
}
