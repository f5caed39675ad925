use anyhow::{bail, Result};
use colored::*;
use paxconv_core::fixtures::{self, SelfCheckReport};
use tracing::info;

pub fn execute() -> Result<SelfCheckReport> {
    info!("Running self-check against {} known pairs", fixtures::KNOWN_PAIRS.len());

    let report = fixtures::self_check();

    println!("Testing against known examples:");
    println!("{}", "=".repeat(70));

    for result in &report.results {
        println!();
        println!("Kantec:   {}", result.kantec);
        println!("Expected: {}", result.expected);
        match &result.actual {
            Ok(id) => println!("Result:   {}", id),
            Err(e) => println!("Result:   {} {}", "error:".red(), e),
        }

        if result.passed() {
            println!("Status:   {}", "✓ MATCH".green());
        } else {
            println!("Status:   {}", "✗ MISMATCH".red());
            if let Some(pos) = result.first_difference() {
                let expected = result.expected.chars().nth(pos).unwrap_or(' ');
                let actual = result
                    .actual
                    .as_ref()
                    .ok()
                    .and_then(|id| id.as_str().chars().nth(pos))
                    .unwrap_or(' ');
                println!(
                    "  First difference at position {}: expected '{}', got '{}'",
                    pos, expected, actual
                );
            }
        }
    }

    println!();
    println!("{}", "=".repeat(70));

    if !report.all_passed() {
        bail!(
            "Self-check failed: {} of {} known pairs matched",
            report.passed_count(),
            report.results.len()
        );
    }

    println!("{} All known pairs match.", "✓".green());
    Ok(report)
}
