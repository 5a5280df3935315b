use migra_core::application::ConfirmationGate;
use migra_core::domain::PlanSummary;
use std::io::{BufRead, Write};

/// Stdin-backed confirmation gate shown before bulk registry mutation.
pub struct StdinConfirm;

impl ConfirmationGate for StdinConfirm {
    fn confirm(&self, summary: &PlanSummary) -> bool {
        println!("Claims: {}", summary.claimed);
        println!("Current recipients: {}", summary.registered);
        println!("New recipients: {}", summary.new);
        println!("Recipients to be removed: {}", summary.to_remove);
        print!("Continue? [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
