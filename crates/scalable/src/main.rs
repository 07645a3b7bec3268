//! Scalable - lays out a design-space document at a given screen size
//!
//! Usage: scalable <LAYOUT.json> <WIDTH> <HEIGHT> [--json]

mod document;
mod error;
mod report;

use std::env;
use std::path::Path;
use std::process::ExitCode;

use scalable_layout::MeasureSpec;

use crate::document::LayoutDocument;
use crate::error::{AppError, AppResult};
use crate::report::Report;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("Scalable {}", VERSION);
            ExitCode::SUCCESS
        }
        _ => {
            let json = match parse_json_flag(&args[1..]) {
                Some(json) => json,
                None => {
                    eprintln!("Usage: {} <LAYOUT.json> <WIDTH> <HEIGHT> [--json]", args[0]);
                    return ExitCode::FAILURE;
                }
            };

            if let Err(e) = run(&args[1], &args[2], &args[3], json) {
                log::error!("Layout pass failed: {}", e);
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Scalable {} - Lay out a design-space document at a given screen size

USAGE:
    {} <LAYOUT.json> <WIDTH> <HEIGHT> [--json]

OPTIONS:
    -h, --help        Print this help message
    -V, --version     Print version information
    --json            Print the pass report as JSON

EXAMPLES:
    {} crates/scalable/layouts/card.json 320 480
    {} crates/scalable/layouts/card.json 1080 1920 --json

"#,
        VERSION, program, program, program
    );
}

/// Check the positional arguments and whether `--json` follows them.
/// `None` means the argument list does not match the usage line.
fn parse_json_flag(args: &[String]) -> Option<bool> {
    match args {
        [_, _, _] => Some(false),
        [_, _, _, flag] if flag == "--json" => Some(true),
        _ => None,
    }
}

/// Run one measure and layout pass and print what it produced
fn run(path: &str, width: &str, height: &str, json: bool) -> AppResult<()> {
    let width = parse_pixels("width", width)?;
    let height = parse_pixels("height", height)?;

    let document = LayoutDocument::load(Path::new(path))?;
    let mut layout = document.build();

    let pass = layout.perform_pass(MeasureSpec::exactly(width), MeasureSpec::exactly(height))?;
    let report = Report::collect(&layout, &pass, &document);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn parse_pixels(name: &'static str, value: &str) -> AppResult<i32> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::invalid_argument(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("width", "320").unwrap(), 320);
        assert!(matches!(
            parse_pixels("width", "wide"),
            Err(AppError::InvalidArgument { name: "width", .. })
        ));
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_json_flag() {
        assert_eq!(parse_json_flag(&args(&["card.json", "320", "480"])), Some(false));
        assert_eq!(parse_json_flag(&args(&["card.json", "320", "480", "--json"])), Some(true));
    }

    #[test]
    fn test_parse_json_flag_rejects_unknown_arguments() {
        assert_eq!(parse_json_flag(&args(&["card.json", "320"])), None);
        assert_eq!(parse_json_flag(&args(&["card.json", "320", "480", "--jsn"])), None);
        assert_eq!(parse_json_flag(&args(&["card.json", "320", "480", "--json", "extra"])), None);
    }

    #[test]
    fn test_run_missing_file() {
        let result = run("does/not/exist.json", "320", "480", false);
        assert!(matches!(result, Err(AppError::Read { .. })));
    }
}
