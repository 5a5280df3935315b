use crate::domain::TransactionGroup;
use crate::foundation::{CoordinatorError, SubmissionId};
use crate::infrastructure::rpc::{FinalityInfo, LedgerRpc};
use log::info;

/// Result of handing a group to the network.
#[derive(Clone, Debug)]
pub struct SubmissionOutcome {
    pub submission: SubmissionId,
    /// Present only when finality was awaited.
    pub finality: Option<FinalityInfo>,
}

/// Submit a fully authorized group, optionally blocking until finality.
///
/// The slot check runs before any network call: a group with an empty
/// authorization slot never reaches the transport. Failures surface
/// immediately and are never retried here.
pub async fn submit(rpc: &dyn LedgerRpc, group: &TransactionGroup, wait: bool) -> Result<SubmissionOutcome, CoordinatorError> {
    let operations = group.authorized_operations()?;
    let submission = rpc.submit_group(&operations).await?;
    info!("group submitted submission={} operations={}", submission, operations.len());
    if !wait {
        return Ok(SubmissionOutcome {
            submission,
            finality: None,
        });
    }
    let finality = rpc.wait_for_finality(&submission).await?;
    info!("group finalized submission={} round={}", submission, finality.confirmed_round);
    Ok(SubmissionOutcome {
        submission,
        finality: Some(finality),
    })
}
