//! Read-only views the reconciliation engine depends on.

use crate::domain::Address;
use crate::foundation::{AppId, AssetId, CoordinatorError, METHOD_CLAIM};
use crate::infrastructure::rpc::{IndexerRpc, LedgerRpc};
use log::debug;
use std::collections::HashSet;

/// Complete snapshot of currently registered recipients, in registry order.
pub async fn list_registered_accounts(rpc: &dyn LedgerRpc, application: AppId) -> Result<Vec<Address>, CoordinatorError> {
    let keys = rpc.registry_keys(application).await?;
    keys.iter().map(|key| Address::from_registry_key(key)).collect()
}

/// Accounts observed to have executed the claim entrypoint.
///
/// Cursor-based scan over the asset-transfer history of the application's
/// funding account; a page without a continuation cursor terminates the
/// scan. Recomputed from scratch on every call - no cursor is persisted,
/// so a re-run is always a full, idempotent scan.
pub async fn list_claimed_accounts(
    indexer: &dyn IndexerRpc,
    funding_account: &Address,
    asset: AssetId,
) -> Result<HashSet<Address>, CoordinatorError> {
    let mut claimed = HashSet::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;
    loop {
        let page = indexer.search_asset_transfers(funding_account, asset, cursor.as_deref()).await?;
        pages += 1;
        for record in &page.records {
            if record.call_args.first().map(Vec::as_slice) == Some(METHOD_CLAIM) {
                claimed.insert(record.sender);
            }
        }
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    debug!("claim scan finished pages={} claimed={}", pages, claimed.len());
    Ok(claimed)
}
