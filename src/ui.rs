//! Console listings and the interactive explicit-entry prompt.
//!
//! Formatting helpers are pure and return strings; the print functions and
//! the prompt loop are the only places that touch stdout/stderr or stdin.
//! The engine never prompts or prints.

use crate::engine::{Outcome, Report};
use crate::error::Warning;
use crate::locator::{self, VersionRecord};
use console::style;
use std::io::{self, BufRead, Write};

/// Render a double-line boxed heading sized to fit both the heading and
/// the widest content line beneath it.
fn boxed_heading(heading: &str, content_width: usize) -> String {
    let inner = content_width.max(heading.chars().count() + 8);
    let pad_left = (inner - heading.chars().count()) / 2;
    let pad_right = inner - heading.chars().count() - pad_left;
    format!(
        "╔{line}╗\n║{left}{heading}{right}║\n╚{line}╝",
        line = "═".repeat(inner),
        left = " ".repeat(pad_left),
        right = " ".repeat(pad_right),
    )
}

fn widest_line<I: Iterator<Item = String>>(lines: I) -> usize {
    lines.map(|line| line.chars().count()).max().unwrap_or(0)
}

/// Print a per-file warning, visually distinct from the version listings.
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
}

/// Print the current version of every record under a boxed heading.
pub fn print_current_versions(records: &[VersionRecord]) {
    let width = widest_line(
        records
            .iter()
            .map(|r| format!("{} {}", r.triple, r.path.display())),
    );
    println!("\n{}", boxed_heading("Current Version Numbers", width));
    for record in records {
        println!(
            "{} {}",
            style(record.triple).cyan(),
            style(record.path.display()).yellow()
        );
    }
    println!();
}

/// Print the outcome of a run: one old ---> new line per written file,
/// plus distinct lines for skipped and failed files.
pub fn print_report(report: &Report) {
    let width = widest_line(
        report
            .entries
            .iter()
            .map(|e| format!("{}  --->  {} {}", e.old, e.new, e.path.display())),
    );
    println!("\n{}", boxed_heading("New Version Numbers", width));
    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Written => println!(
                "{}  --->  {} {}",
                style(entry.old).cyan(),
                style(entry.new).green(),
                style(entry.path.display()).yellow()
            ),
            Outcome::Skipped => println!(
                "{}  --->  {} {} {}",
                style(entry.old).cyan(),
                style(entry.new).red(),
                style(entry.path.display()).yellow(),
                style("(skipped)").red()
            ),
            Outcome::Failed(reason) => println!(
                "{}  --->  {} {} {}",
                style(entry.old).cyan(),
                style(entry.new).red(),
                style(entry.path.display()).yellow(),
                style(format!("(write failed: {reason})")).red()
            ),
        }
    }
    println!();
    print_warnings(&report.warnings);
}

/// Prompt until the user enters a valid `digits.digits.digits` value or
/// quits. Returns `None` on `q`/`Q` or end of input.
pub fn prompt_new_version() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter a new version number or \"q\" to quit: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let entered = line.trim();
        if entered.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if locator::validate_bare(entered).is_some() {
            return Ok(Some(entered.to_string()));
        }
        println!("Incorrect version number format. Enter three sets of digits separated by periods.");
        println!("Example: 0.1.3 or 1.2.12");
    }
}
