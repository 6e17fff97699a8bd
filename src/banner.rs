// src/banner.rs
use crate::models::ProbeOutcome;

fn separator() -> String {
    "=".repeat(60)
}

/// Prints the startup banner to the console.
pub fn print_banner() {
    let separator = separator();
    println!("{}", separator);
    println!("Model Studio application connectivity probe");
    println!("{}", separator);
    println!();
}

/// Prints the line announcing that the request is about to go out.
pub fn print_progress(api_base: &str) {
    println!("🚀 Sending request to {} ...", api_base);
}

pub fn closing_line(outcome: ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Succeeded => "✅ Test finished - connection succeeded",
        ProbeOutcome::Failed => "❌ Test finished - connection failed",
    }
}

pub fn print_closing(outcome: ProbeOutcome) {
    let separator = separator();
    println!();
    println!("{}", separator);
    println!("{}", closing_line(outcome));
    println!("{}", separator);
}
