use crate::application::client::AppClient;
use crate::application::pipeline::{self, SubmissionOutcome};
use crate::application::readers;
use crate::domain::reconcile::{PlanSummary, ReconciliationPlan};
use crate::domain::signing::KeyCredential;
use crate::domain::Address;
use crate::foundation::CoordinatorError;
use crate::infrastructure::rpc::{IndexerRpc, LedgerRpc};
use log::{info, warn};

/// Blocking yes/no prompt shown before bulk mutation.
pub trait ConfirmationGate {
    fn confirm(&self, summary: &PlanSummary) -> bool;
}

/// Outcome of one reconciliation pass.
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// The operator refused the gate; nothing was submitted.
    Aborted { plan: ReconciliationPlan },
    /// Every batch was handed to the network. Finality is not awaited;
    /// a re-run converges on whatever actually landed.
    Submitted {
        plan: ReconciliationPlan,
        receipts: Vec<SubmissionOutcome>,
    },
}

/// Reconciles the on-chain registry against a desired recipient list.
///
/// Holds no state across runs; both account sets are re-read fresh on
/// every invocation. Single-operator usage is assumed - there is no
/// cross-run mutual exclusion.
pub struct ReconciliationEngine<'a> {
    client: &'a AppClient,
    rpc: &'a dyn LedgerRpc,
    indexer: &'a dyn IndexerRpc,
    gate: &'a dyn ConfirmationGate,
}

impl<'a> ReconciliationEngine<'a> {
    pub fn new(client: &'a AppClient, rpc: &'a dyn LedgerRpc, indexer: &'a dyn IndexerRpc, gate: &'a dyn ConfirmationGate) -> Self {
        Self {
            client,
            rpc,
            indexer,
            gate,
        }
    }

    /// Compute the delta and submit one registration group per batch,
    /// sequentially, without waiting for per-batch finality.
    ///
    /// A transport failure aborts the loop; batches already handed over
    /// stand, and the next run's delta no longer contains whatever was
    /// confirmed in the meantime.
    pub async fn run(&self, desired: &[Address], credential: &KeyCredential) -> Result<ReconcileOutcome, CoordinatorError> {
        let registered = readers::list_registered_accounts(self.rpc, self.client.app_id()).await?;
        let claimed =
            readers::list_claimed_accounts(self.indexer, &self.client.application_account(), self.client.asset_id()).await?;
        let plan = ReconciliationPlan::compute(desired, &registered, &claimed);
        let summary = plan.summary();
        info!("reconciliation plan {}", summary);

        if !plan.to_remove.is_empty() {
            // The registry application exposes no removal entrypoint.
            warn!(
                "{} registered account(s) are no longer desired; removal is not supported on-chain",
                plan.to_remove.len()
            );
        }

        if !self.gate.confirm(&summary) {
            info!("reconciliation aborted at confirmation gate");
            return Ok(ReconcileOutcome::Aborted { plan });
        }

        let mut receipts = Vec::new();
        for (index, batch) in plan.batches().enumerate() {
            let mut group = self.client.register_recipients(batch)?;
            group.authorize(credential, None)?;
            let outcome = pipeline::submit(self.rpc, &group, false).await?;
            info!(
                "registration batch submitted batch={} size={} submission={}",
                index + 1,
                batch.len(),
                outcome.submission
            );
            receipts.push(outcome);
        }
        Ok(ReconcileOutcome::Submitted { plan, receipts })
    }
}
