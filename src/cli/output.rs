use crate::ScanResult;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    file: String,
    #[serde(flatten)]
    result: &'a ScanResult,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    files_checked: usize,
    unknown_words: usize,
    files: Vec<JsonFile<'a>>,
}

pub fn print_json(results: &[(PathBuf, ScanResult)]) {
    let files: Vec<JsonFile> = results
        .iter()
        .map(|(path, result)| JsonFile {
            file: path.display().to_string(),
            result,
        })
        .collect();

    let output = JsonOutput {
        files_checked: results.len(),
        unknown_words: results.iter().map(|(_, r)| r.unknown_words()).sum(),
        files,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_file_header(file_path: &Path, colored_output: bool) {
    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }
}

pub fn print_scan_summary(total_unknown: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_unknown == 0 {
        if colored {
            println!("{}", "✓ No unknown words found!".green().bold());
        } else {
            println!("✓ No unknown words found!");
        }
    } else {
        let word_word = if total_unknown == 1 { "word" } else { "words" };
        if colored {
            println!(
                "{} {} unknown {} found in {} {}",
                "✗".red().bold(),
                total_unknown.to_string().red().bold(),
                word_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} unknown {} found in {} {}",
                total_unknown,
                word_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
