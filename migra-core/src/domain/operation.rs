use crate::domain::address::Address;
use crate::foundation::{
    AppId, AssetId, CoordinatorError, GroupTag, Hash32, OperationId, FLAT_OPERATION_FEE, OPERATION_DIGEST_PREFIX,
};
use bincode::Options;
use serde::{Deserialize, Serialize};

/// State sizing declared at application creation.
///
/// Immutable after creation; changing it requires recreating the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSchema {
    pub integer_slots: u32,
    pub byte_slice_slots: u32,
}

/// Reference to a registry storage slot an operation touches.
///
/// `application` 0 refers to the application being called.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxRef {
    pub application: u64,
    pub key: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationPayload {
    ApplicationCreate {
        approval_program: Vec<u8>,
        clear_program: Vec<u8>,
        global_schema: StateSchema,
        local_schema: StateSchema,
        extra_pages: u32,
    },
    ApplicationUpdate {
        application: AppId,
        approval_program: Vec<u8>,
        clear_program: Vec<u8>,
    },
    ApplicationDelete {
        application: AppId,
        accounts: Vec<Address>,
        assets: Vec<AssetId>,
    },
    ApplicationCall {
        application: AppId,
        method: Vec<u8>,
        args: Vec<Vec<u8>>,
        accounts: Vec<Address>,
        assets: Vec<AssetId>,
        box_refs: Vec<BoxRef>,
    },
    Payment {
        receiver: Address,
        amount: u64,
    },
}

/// An unsigned intent to mutate ledger or application state.
///
/// Constructed fresh per call; mutated only to attach the group tag, then
/// consumed exactly once by submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Account whose authorization this operation requires.
    pub origin: Address,
    /// Fee in base units.
    pub fee: u64,
    /// Free-form note; the claim flow uses it as a uniqueness nonce.
    pub note: Option<Vec<u8>>,
    /// Group linkage tag; present only while the operation belongs to a group.
    pub group: Option<GroupTag>,
    pub payload: OperationPayload,
}

impl Operation {
    pub fn new(origin: Address, payload: OperationPayload) -> Self {
        Self {
            origin,
            fee: FLAT_OPERATION_FEE,
            note: None,
            group: None,
            payload,
        }
    }

    pub fn with_fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_note(mut self, note: Vec<u8>) -> Self {
        self.note = Some(note);
        self
    }

    /// Digest an authorizer signs; also the basis of the operation identifier.
    pub fn signing_payload(&self) -> Result<Hash32, CoordinatorError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(OPERATION_DIGEST_PREFIX);
        let encoded = bincode::DefaultOptions::new().with_fixint_encoding().serialize(self)?;
        hasher.update(&encoded);
        Ok(*hasher.finalize().as_bytes())
    }

    pub fn id(&self) -> Result<OperationId, CoordinatorError> {
        Ok(OperationId::from(self.signing_payload()?))
    }
}
