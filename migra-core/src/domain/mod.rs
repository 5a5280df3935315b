pub mod address;
pub mod cost;
pub mod group;
pub mod operation;
pub mod reconcile;
pub mod signing;

pub use address::{application_address, Address};
pub use group::TransactionGroup;
pub use operation::{BoxRef, Operation, OperationPayload, StateSchema};
pub use reconcile::{PlanSummary, ReconciliationPlan};
pub use signing::{Authorization, AuthorizationProof, KeyCredential, ProgramAuthority, SignedOperation};
