pub mod client;
pub mod pipeline;
pub mod readers;
pub mod reconcile;

pub use client::AppClient;
pub use pipeline::{submit, SubmissionOutcome};
pub use reconcile::{ConfirmationGate, ReconcileOutcome, ReconciliationEngine};
