//! Email masking demonstration.
//!
//! This example shows how addresses are partially masked before they reach
//! logs, audit rows or admin views, and how the `Email` wrapper keeps the raw
//! address out of formatted output.
//!
//! Run with: `cargo run --example email_masking`

use query_guard::audit::{AuditEntry, AuditOutcome};
use query_guard::{mask_email, Email};

/// Simulates a user record loaded for an admin listing
#[derive(Debug)]
struct UserRow {
    #[allow(dead_code)]
    id: u64,
    email: Email,
}

fn main() {
    println!("=== Email Masking Example ===\n");

    println!("--- Scenario 1: Masking Rules ---");
    let samples = [
        "john.doe@example.com",
        "ab@example.com",
        "a@example.com",
        "  Mixed.Case@Example.COM ",
        "not-an-email",
        "two@@example.com",
        "user@",
        "",
    ];
    for raw in samples {
        println!("  {:<28} -> {}", format!("{:?}", raw), mask_email(raw));
    }
    println!("  {:<28} -> {}", "None", mask_email(None));

    println!("\n--- Scenario 2: Debug Output (Automatic Masking) ---");
    let row = UserRow {
        id: 7,
        email: Email::new("grace.hopper@example.com"),
    };
    println!("Row: {:#?}", row);
    println!("Notice: only the masked address is printed");

    println!("\n--- Scenario 3: Audit Entries Store The Masked Form ---");
    let entry = AuditEntry::new("req-42", Some(&row.email), "export_users", AuditOutcome::Success)
        .with_detail("rows=1");
    println!("{}", entry);

    println!("\n--- Scenario 4: Explicit Access (When Needed) ---");
    println!("Raw address: {}", row.email.expose_email());
    println!("Note: expose_email() is the only way to read it");
}
