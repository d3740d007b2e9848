use crate::{collection::build, fs::write_collection};
use anyhow::Result;
use chrono::Local;
use std::process;

pub const OUTPUT_FILE: &str = "languageExchange_lessons_quizzes.postman_collection.json";

pub fn action_export(_c: &seahorse::Context) {
    export(OUTPUT_FILE).unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    });
    println!("✅ Postman collection exported to {}", OUTPUT_FILE);
}

fn export(path: &str) -> Result<()> {
    let generated_at = Local::now().naive_local();
    log::info!("building collection at {}", generated_at);
    let collection = build(generated_at)?;
    write_collection(path, &collection)
}
