//! # Triple Bot CLI
//!
//! Terminal front end for the concrete axial check. Collects the five inputs
//! (flags, a JSON file, or interactive prompts), runs validation and the
//! calculation through `axial_core`, and prints the validation report.
//!
//! Exit status: 0 when the column passes, 2 when capacity is exceeded,
//! 1 on invalid input.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use axial_core::{CalcError, CalcResult, ColumnInput, ValidationReport};
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "axial_cli")]
#[command(version)]
#[command(about = "Simplified concrete axial compression check", long_about = None)]
struct Args {
    /// Service axial load P (kN)
    #[arg(long, value_name = "KN")]
    load: Option<f64>,

    /// Load combination factor γ
    #[arg(long)]
    gamma: Option<f64>,

    /// Gross section area Ag (mm²)
    #[arg(long, value_name = "MM2")]
    area: Option<f64>,

    /// Concrete compressive strength f'c (MPa)
    #[arg(long, value_name = "MPA")]
    fc: Option<f64>,

    /// Strength reduction factor φ
    #[arg(long)]
    phi: Option<f64>,

    /// Read inputs from a JSON file (flags still override individual fields)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Prompt for each input, showing the current value as default
    #[arg(short, long)]
    interactive: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Report plus the moment it was produced. The timestamp is display-only.
#[derive(Serialize)]
struct TimedReport<'a> {
    executed_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Column passes
const EXIT_PASS: u8 = 0;
/// Invalid input or any other error
const EXIT_ERROR: u8 = 1;
/// Capacity exceeded
const EXIT_FAIL: u8 = 2;

const TITLE: &str = "TRIPLE BOT – Structural Validation Engine";

const HEADER_LINES: &[&str] = &[
    "Version: v1.0 – Deterministic Core Locked",
    "Execution Mode: Local Deterministic Evaluation",
    "Validation Scope: Simplified Concrete Axial Compression",
];

fn main() -> ExitCode {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    ExitCode::from(run(&args))
}

/// Resolve inputs, evaluate, print, and return the process exit status.
fn run(args: &Args) -> u8 {
    let outcome = resolve_input(args).and_then(|input| ValidationReport::run(&input));

    match &outcome {
        Ok(report) => {
            if let Err(e) = emit(report, args.json) {
                print_errors(&e);
                return EXIT_ERROR;
            }
        }
        Err(e) => print_errors(e),
    }

    exit_code(&outcome)
}

fn exit_code(outcome: &CalcResult<ValidationReport>) -> u8 {
    match outcome {
        Ok(report) if report.result.passes() => EXIT_PASS,
        Ok(_) => EXIT_FAIL,
        Err(_) => EXIT_ERROR,
    }
}

fn emit(report: &ValidationReport, json: bool) -> CalcResult<()> {
    let executed_at = Utc::now();
    if json {
        let timed = TimedReport { executed_at, report };
        println!("{}", serde_json::to_string_pretty(&timed)?);
    } else {
        print_report(report, executed_at);
    }
    Ok(())
}

/// Defaults, then the JSON file, then flags, then interactive prompts.
fn resolve_input(args: &Args) -> CalcResult<ColumnInput> {
    let mut input = match &args.input {
        Some(path) => read_input_file(path)?,
        None => ColumnInput::default(),
    };

    apply_overrides(&mut input, args);

    if args.interactive {
        input = prompt_input(input);
    }

    Ok(input)
}

fn read_input_file(path: &Path) -> CalcResult<ColumnInput> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input("input", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn apply_overrides(input: &mut ColumnInput, args: &Args) {
    if let Some(load) = args.load {
        input.load_kn = load;
    }
    if let Some(gamma) = args.gamma {
        input.gamma = gamma;
    }
    if let Some(area) = args.area {
        input.area_mm2 = area;
    }
    if let Some(fc) = args.fc {
        input.fc_mpa = fc;
    }
    if let Some(phi) = args.phi {
        input.phi = phi;
    }
}

fn prompt_input(defaults: ColumnInput) -> ColumnInput {
    println!("Demand Parameters");
    let load_kn = prompt_f64("  Service Axial Load (kN)", defaults.load_kn);
    let gamma = prompt_f64("  Load Combination Factor γ (-)", defaults.gamma);
    println!("Resistance Parameters");
    let area_mm2 = prompt_f64("  Gross Section Area (mm²)", defaults.area_mm2);
    let fc_mpa = prompt_f64("  Concrete Compressive Strength f'c (MPa)", defaults.fc_mpa);
    let phi = prompt_f64("  Strength Reduction Factor φ (-)", defaults.phi);
    println!();

    ColumnInput {
        load_kn,
        area_mm2,
        fc_mpa,
        phi,
        gamma,
    }
}

fn prompt_f64(label: &str, default: f64) -> f64 {
    print!("{} [{}]: ", label, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return default;
    }

    parse_or_default(&line, default)
}

fn parse_or_default(line: &str, default: f64) -> f64 {
    line.trim().parse().unwrap_or(default)
}

fn error_heading(error: &CalcError) -> &'static str {
    match error {
        CalcError::ValidationFailed { .. } => "Input Validation Error",
        _ => "Error",
    }
}

fn print_errors(error: &CalcError) {
    eprintln!("{}", error_heading(error).red().bold());
    for message in error.messages() {
        eprintln!("- {}", message);
    }
}

fn execution_control_lines(executed_at: DateTime<Utc>) -> Vec<String> {
    vec![
        format!("Execution Timestamp: {} UTC", executed_at.format("%Y-%m-%d %H:%M:%S%.6f")),
        "Deterministic Evaluation: ENABLED".to_string(),
        "Core Logic State: LOCKED".to_string(),
    ]
}

fn print_report(report: &ValidationReport, executed_at: DateTime<Utc>) {
    let rule = "═══════════════════════════════════════";

    println!("{}", rule);
    println!("  {}", TITLE.bold());
    println!("{}", rule);
    for line in HEADER_LINES {
        println!("  {}", line);
    }
    println!();
    println!("Model Assumptions:");
    for assumption in &report.assumptions {
        println!("  - {}", assumption);
    }
    println!();
    println!("Demand Side:");
    println!("  Factored Load Pu: {} kN", report.display_pu());
    println!();
    println!("Resistance Side:");
    println!("  Nominal Capacity Pn: {} kN", report.display_pn());
    println!("  Design Capacity φPn: {} kN", report.display_phi_pn());
    println!();
    println!("Verification:");
    println!("  Demand/Capacity Ratio (Pu/φPn): {}", report.display_dc_ratio());
    println!();

    let verdict = report.result.governing_message();
    if report.result.passes() {
        println!("  {} {}", "[PASS]".green().bold(), verdict);
    } else {
        println!("  {} {}", "[FAIL]".red().bold(), verdict);
    }

    println!();
    println!("Execution Control:");
    for line in execution_control_lines(executed_at) {
        println!("  {}", line);
    }
    println!();
    println!("Deterministic Execution Signature:");
    println!("  {}", report.signature.bold());
    println!();
    println!("Formula Reference:");
    for formula in &report.formulas {
        println!("  {}", formula);
    }
    println!();
    println!("{}", report.disclaimer.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["axial_cli"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults_without_flags() {
        let input = resolve_input(&args(&[])).unwrap();
        assert_eq!(input, ColumnInput::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let input = resolve_input(&args(&["--load", "5000", "--phi", "0.9"])).unwrap();
        assert_eq!(input.load_kn, 5000.0);
        assert_eq!(input.phi, 0.9);
        assert_eq!(input.gamma, 1.4);
    }

    #[test]
    fn test_negative_flag_value_reaches_validator() {
        let input = resolve_input(&args(&["--load=-5"])).unwrap();
        assert_eq!(input.validate(), vec!["Axial Load must be > 0 kN"]);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let err = resolve_input(&args(&["--input", "/nonexistent/column.json"])).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run(&args(&[])), EXIT_PASS);
        assert_eq!(run(&args(&["--load", "5000"])), EXIT_FAIL);
        assert_eq!(run(&args(&["--load=-5"])), EXIT_ERROR);
        assert_eq!(run(&args(&["--json", "--load", "5000"])), EXIT_FAIL);
        assert_eq!(run(&args(&["--input", "/nonexistent/column.json"])), EXIT_ERROR);
    }

    #[test]
    fn test_exit_code_mapping() {
        let fail = ValidationReport::run(&ColumnInput { load_kn: 5000.0, ..ColumnInput::default() });
        assert_eq!(exit_code(&fail), 2);
        let invalid = ValidationReport::run(&ColumnInput { phi: 0.0, ..ColumnInput::default() });
        assert_eq!(exit_code(&invalid), 1);
        assert_eq!(exit_code(&ValidationReport::run(&ColumnInput::default())), 0);
    }

    #[test]
    fn test_error_headings() {
        let invalid = ValidationReport::run(&ColumnInput { load_kn: -5.0, ..ColumnInput::default() }).unwrap_err();
        assert_eq!(error_heading(&invalid), "Input Validation Error");
        assert_eq!(invalid.messages(), vec!["Axial Load must be > 0 kN"]);

        let file = resolve_input(&args(&["--input", "/nonexistent/column.json"])).unwrap_err();
        assert_eq!(error_heading(&file), "Error");
    }

    #[test]
    fn test_report_header_and_execution_control() {
        assert_eq!(TITLE, "TRIPLE BOT – Structural Validation Engine");
        assert_eq!(
            HEADER_LINES,
            &[
                "Version: v1.0 – Deterministic Core Locked",
                "Execution Mode: Local Deterministic Evaluation",
                "Validation Scope: Simplified Concrete Axial Compression",
            ]
        );

        let executed_at = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z").unwrap().with_timezone(&Utc);
        let lines = execution_control_lines(executed_at);
        assert_eq!(lines[0], "Execution Timestamp: 2026-01-02 03:04:05.000000 UTC");
        assert_eq!(lines[1], "Deterministic Evaluation: ENABLED");
        assert_eq!(lines[2], "Core Logic State: LOCKED");
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("  42.5\n", 1.0), 42.5);
        assert_eq!(parse_or_default("\n", 1.0), 1.0);
        assert_eq!(parse_or_default("abc", 1.0), 1.0);
    }

    #[test]
    fn test_timed_report_flattens() {
        let report = ValidationReport::run(&ColumnInput::default()).unwrap();
        let timed = TimedReport { executed_at: Utc::now(), report: &report };
        let json = serde_json::to_value(&timed).unwrap();
        assert!(json.get("executed_at").is_some());
        assert_eq!(json["signature"], "f74e980efe97335646f8");
    }
}
