use crate::domain::address::{application_address, Address};
use crate::domain::group::TransactionGroup;
use crate::domain::operation::{BoxRef, Operation, OperationPayload, StateSchema};
use crate::foundation::{
    AppId, AssetId, CoordinatorError, CLAIM_NOTE_LENGTH, INNER_TRANSFER_OPERATION_FEE, METHOD_ADD_RECIPIENTS,
    METHOD_CLAIM, METHOD_SETUP,
};
use crate::infrastructure::config::{load_program, AppConfig};
use rand::RngCore;

/// Global state sizing, fixed at creation.
///
/// Changing either schema means recreating the application.
pub const GLOBAL_SCHEMA: StateSchema = StateSchema {
    integer_slots: 2,
    byte_slice_slots: 2,
};
pub const LOCAL_SCHEMA: StateSchema = StateSchema {
    integer_slots: 0,
    byte_slice_slots: 0,
};

/// Stateless builder for the operation groups this deployment needs.
///
/// Each method returns an unsigned single-operation group; callers merge
/// groups when they need multi-operation atomicity.
pub struct AppClient {
    app_id: AppId,
    asset_id: AssetId,
    operator: Address,
    approval_program: Vec<u8>,
    clear_program: Vec<u8>,
}

impl AppClient {
    pub fn new(
        app_id: AppId,
        asset_id: AssetId,
        operator: Address,
        approval_program: Vec<u8>,
        clear_program: Vec<u8>,
    ) -> Self {
        Self {
            app_id,
            asset_id,
            operator,
            approval_program,
            clear_program,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CoordinatorError> {
        let operator = config
            .app
            .operator_address
            .parse::<Address>()
            .map_err(|err| CoordinatorError::Config(format!("app.operator_address: {err}")))?;
        let approval_program = load_program(&config.programs.approval_path)?;
        let clear_program = load_program(&config.programs.clear_path)?;
        Ok(Self::new(
            AppId(config.app.id),
            AssetId(config.app.asset_id),
            operator,
            approval_program,
            clear_program,
        ))
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    pub fn asset_id(&self) -> AssetId {
        self.asset_id
    }

    pub fn operator(&self) -> Address {
        self.operator
    }

    /// The application's derived funding account.
    pub fn application_account(&self) -> Address {
        application_address(self.app_id)
    }

    /// Deploy the registry application.
    pub fn create_application(&self) -> Result<TransactionGroup, CoordinatorError> {
        let operation = Operation::new(
            self.operator,
            OperationPayload::ApplicationCreate {
                approval_program: self.approval_program.clone(),
                clear_program: self.clear_program.clone(),
                global_schema: GLOBAL_SCHEMA,
                local_schema: LOCAL_SCHEMA,
                extra_pages: 0,
            },
        );
        TransactionGroup::build(vec![operation])
    }

    /// Replace the deployed program bytecode.
    pub fn update_application(&self) -> Result<TransactionGroup, CoordinatorError> {
        let operation = Operation::new(
            self.operator,
            OperationPayload::ApplicationUpdate {
                application: self.app_id,
                approval_program: self.approval_program.clone(),
                clear_program: self.clear_program.clone(),
            },
        );
        TransactionGroup::build(vec![operation])
    }

    /// Delete the application; the doubled fee covers the inner transfer
    /// returning the remaining asset balance.
    pub fn delete_application(&self) -> Result<TransactionGroup, CoordinatorError> {
        let operation = Operation::new(
            self.operator,
            OperationPayload::ApplicationDelete {
                application: self.app_id,
                accounts: vec![self.operator],
                assets: vec![self.asset_id],
            },
        )
        .with_fee(INNER_TRANSFER_OPERATION_FEE);
        TransactionGroup::build(vec![operation])
    }

    /// Point the application at the distributed asset (opts its funding
    /// account into holding it).
    pub fn setup(&self) -> Result<TransactionGroup, CoordinatorError> {
        let operation = Operation::new(
            self.operator,
            OperationPayload::ApplicationCall {
                application: self.app_id,
                method: METHOD_SETUP.to_vec(),
                args: Vec::new(),
                accounts: vec![self.operator],
                assets: vec![self.asset_id],
                box_refs: Vec::new(),
            },
        )
        .with_fee(INNER_TRANSFER_OPERATION_FEE);
        TransactionGroup::build(vec![operation])
    }

    /// Transfer `amount` base units to the application's funding account.
    pub fn fund_application(&self, amount: u64) -> Result<TransactionGroup, CoordinatorError> {
        let operation = Operation::new(
            self.operator,
            OperationPayload::Payment {
                receiver: self.application_account(),
                amount,
            },
        );
        TransactionGroup::build(vec![operation])
    }

    /// Register recipients into the on-chain registry.
    ///
    /// One argument and one box reference per account; the per-operation
    /// reference ceiling is the reconciliation engine's responsibility.
    pub fn register_recipients(&self, accounts: &[Address]) -> Result<TransactionGroup, CoordinatorError> {
        let args = accounts.iter().map(|account| account.as_bytes().to_vec()).collect();
        let box_refs = accounts
            .iter()
            .map(|account| BoxRef {
                application: 0,
                key: account.as_bytes().to_vec(),
            })
            .collect();
        let operation = Operation::new(
            self.operator,
            OperationPayload::ApplicationCall {
                application: self.app_id,
                method: METHOD_ADD_RECIPIENTS.to_vec(),
                args,
                accounts: Vec::new(),
                assets: Vec::new(),
                box_refs,
            },
        );
        TransactionGroup::build(vec![operation])
    }

    /// Claim the distributed asset into `claimant`'s account.
    ///
    /// The random note distinguishes byte-identical resubmissions for
    /// network-level deduplication; the application's own state guards
    /// against duplicate claims.
    pub fn claim(&self, claimant: Address) -> Result<TransactionGroup, CoordinatorError> {
        let mut note = [0u8; CLAIM_NOTE_LENGTH];
        rand::thread_rng().fill_bytes(&mut note);
        let operation = Operation::new(
            claimant,
            OperationPayload::ApplicationCall {
                application: self.app_id,
                method: METHOD_CLAIM.to_vec(),
                args: Vec::new(),
                accounts: Vec::new(),
                assets: vec![self.asset_id],
                box_refs: vec![BoxRef {
                    application: 0,
                    key: claimant.as_bytes().to_vec(),
                }],
            },
        )
        .with_fee(INNER_TRANSFER_OPERATION_FEE)
        .with_note(note.to_vec());
        TransactionGroup::build(vec![operation])
    }
}
