use crate::domain::signing::{verify_authorization, SignedOperation};
use crate::domain::Address;
use crate::foundation::{AppId, AssetId, CoordinatorError, OperationId, SubmissionId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// A historical application-call record as reported by the indexer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub sender: Address,
    pub call_args: Vec<Vec<u8>>,
}

/// One page of historical records plus the continuation cursor.
///
/// An absent cursor terminates the scan.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordPage {
    pub records: Vec<HistoricalRecord>,
    pub next_cursor: Option<String>,
}

/// Finality metadata returned once the network reports inclusion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinalityInfo {
    pub confirmed_round: u64,
    pub operation_ids: Vec<OperationId>,
}

#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Submit a fully authorized, ordered operation list as one atomic unit.
    async fn submit_group(&self, operations: &[SignedOperation]) -> Result<SubmissionId, CoordinatorError>;
    /// Block until the network confirms the submission.
    async fn wait_for_finality(&self, submission: &SubmissionId) -> Result<FinalityInfo, CoordinatorError>;
    /// Complete snapshot of the registry keys held by an application.
    async fn registry_keys(&self, application: AppId) -> Result<Vec<Vec<u8>>, CoordinatorError>;
}

#[async_trait]
pub trait IndexerRpc: Send + Sync {
    /// One page of asset-transfer history touching `address`, resumed from
    /// `cursor` when given.
    async fn search_asset_transfers(
        &self,
        address: &Address,
        asset: AssetId,
        cursor: Option<&str>,
    ) -> Result<RecordPage, CoordinatorError>;
}

/// In-process ledger double for tests and dry runs.
///
/// Enforces what the network would: every slot verified, one shared group
/// tag per submission.
pub struct InMemoryLedger {
    submitted: Mutex<Vec<Vec<SignedOperation>>>,
    submissions: Mutex<HashMap<String, Vec<OperationId>>>,
    registry: Mutex<Vec<Vec<u8>>>,
    pages: Mutex<Vec<RecordPage>>,
    fetches: AtomicUsize,
    confirmed_round: AtomicU64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            submissions: Mutex::new(HashMap::new()),
            registry: Mutex::new(Vec::new()),
            pages: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
            confirmed_round: AtomicU64::new(1),
        }
    }

    pub fn with_registry(keys: Vec<Vec<u8>>) -> Self {
        let ledger = Self::new();
        *ledger.registry.lock().expect("registry lock") = keys;
        ledger
    }

    pub fn push_registry_key(&self, key: Vec<u8>) {
        self.registry.lock().expect("registry lock").push(key);
    }

    /// Script the pages the indexer side will serve, in order.
    pub fn set_pages(&self, pages: Vec<RecordPage>) {
        *self.pages.lock().expect("pages lock") = pages;
    }

    pub fn set_confirmed_round(&self, round: u64) {
        self.confirmed_round.store(round, Ordering::Relaxed);
    }

    pub fn submitted_groups(&self) -> Vec<Vec<SignedOperation>> {
        self.submitted.lock().expect("submitted lock").clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerRpc for InMemoryLedger {
    async fn submit_group(&self, operations: &[SignedOperation]) -> Result<SubmissionId, CoordinatorError> {
        if operations.is_empty() {
            return Err(CoordinatorError::Submission("empty submission".to_string()));
        }
        let expected_tag = operations[0].operation.group;
        if expected_tag.is_none() {
            return Err(CoordinatorError::Submission("operations carry no group tag".to_string()));
        }
        let mut operation_ids = Vec::with_capacity(operations.len());
        for (index, signed) in operations.iter().enumerate() {
            if signed.operation.group != expected_tag {
                return Err(CoordinatorError::Submission(format!("operation {index} is linked to a different group")));
            }
            if !verify_authorization(&signed.operation, &signed.authorization)? {
                return Err(CoordinatorError::Submission(format!("authorization rejected for operation {index}")));
            }
            operation_ids.push(signed.operation.id()?);
        }

        let submission = SubmissionId::new(operation_ids[0].to_string());
        self.submissions
            .lock()
            .map_err(|_| CoordinatorError::Submission("submission store lock poisoned".to_string()))?
            .insert(submission.as_str().to_string(), operation_ids);
        self.submitted
            .lock()
            .map_err(|_| CoordinatorError::Submission("submitted store lock poisoned".to_string()))?
            .push(operations.to_vec());
        Ok(submission)
    }

    async fn wait_for_finality(&self, submission: &SubmissionId) -> Result<FinalityInfo, CoordinatorError> {
        let submissions = self
            .submissions
            .lock()
            .map_err(|_| CoordinatorError::NodeRpc("submission store lock poisoned".to_string()))?;
        let operation_ids = submissions
            .get(submission.as_str())
            .cloned()
            .ok_or_else(|| CoordinatorError::NodeRpc(format!("unknown submission {submission}")))?;
        Ok(FinalityInfo {
            confirmed_round: self.confirmed_round.load(Ordering::Relaxed),
            operation_ids,
        })
    }

    async fn registry_keys(&self, _application: AppId) -> Result<Vec<Vec<u8>>, CoordinatorError> {
        Ok(self.registry.lock().map_err(|_| CoordinatorError::NodeRpc("registry lock poisoned".to_string()))?.clone())
    }
}

#[async_trait]
impl IndexerRpc for InMemoryLedger {
    async fn search_asset_transfers(
        &self,
        _address: &Address,
        _asset: AssetId,
        cursor: Option<&str>,
    ) -> Result<RecordPage, CoordinatorError> {
        let index = match cursor {
            None => 0,
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|_| CoordinatorError::IndexerQuery(format!("malformed cursor {cursor:?}")))?,
        };
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let pages = self.pages.lock().map_err(|_| CoordinatorError::IndexerQuery("pages lock poisoned".to_string()))?;
        Ok(pages.get(index).cloned().unwrap_or_default())
    }
}

pub mod http;
pub use http::{HttpIndexerRpc, HttpLedgerRpc};
