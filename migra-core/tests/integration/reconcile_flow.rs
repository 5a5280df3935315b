use crate::fixtures::{address, claim_record, client_for, credential, page};
use migra_core::application::{ConfirmationGate, ReconcileOutcome, ReconciliationEngine};
use migra_core::domain::{OperationPayload, PlanSummary};
use migra_core::infrastructure::rpc::InMemoryLedger;

struct AcceptAll;
impl ConfirmationGate for AcceptAll {
    fn confirm(&self, _summary: &PlanSummary) -> bool {
        true
    }
}

struct RefuseAll;
impl ConfirmationGate for RefuseAll {
    fn confirm(&self, _summary: &PlanSummary) -> bool {
        false
    }
}

fn registration_args(operations: &[migra_core::domain::SignedOperation]) -> Vec<Vec<u8>> {
    match &operations[0].operation.payload {
        OperationPayload::ApplicationCall { args, .. } => args.clone(),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[tokio::test]
async fn reconcile_registers_only_the_missing_unclaimed_accounts() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let (a, b, c, d) = (address(1), address(2), address(3), address(4));

    let ledger = InMemoryLedger::with_registry(vec![b.as_bytes().to_vec(), d.as_bytes().to_vec()]);
    ledger.set_pages(vec![page(vec![claim_record(c)], None)]);

    let engine = ReconciliationEngine::new(&client, &ledger, &ledger, &AcceptAll);
    let outcome = engine.run(&[a, b, c], &operator).await.expect("run");

    match outcome {
        ReconcileOutcome::Submitted { plan, receipts } => {
            assert_eq!(plan.to_add, vec![a]);
            assert_eq!(plan.to_remove, vec![d]);
            assert_eq!(receipts.len(), 1);
        }
        other => panic!("expected submission, got {other:?}"),
    }

    let submitted = ledger.submitted_groups();
    assert_eq!(submitted.len(), 1);
    assert_eq!(registration_args(&submitted[0]), vec![a.as_bytes().to_vec()]);
}

#[tokio::test]
async fn refused_gate_submits_nothing() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let ledger = InMemoryLedger::new();

    let engine = ReconciliationEngine::new(&client, &ledger, &ledger, &RefuseAll);
    let outcome = engine.run(&[address(1)], &operator).await.expect("run");

    assert!(matches!(outcome, ReconcileOutcome::Aborted { .. }));
    assert!(ledger.submitted_groups().is_empty());
}

#[tokio::test]
async fn seventeen_new_accounts_are_submitted_in_three_batches() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let ledger = InMemoryLedger::new();
    let desired: Vec<_> = (1..=17).map(|i| address(i as u8)).collect();

    let engine = ReconciliationEngine::new(&client, &ledger, &ledger, &AcceptAll);
    let outcome = engine.run(&desired, &operator).await.expect("run");

    match outcome {
        ReconcileOutcome::Submitted { receipts, .. } => assert_eq!(receipts.len(), 3),
        other => panic!("expected submission, got {other:?}"),
    }

    let submitted = ledger.submitted_groups();
    assert_eq!(submitted.len(), 3);
    let sizes: Vec<usize> = submitted.iter().map(|group| registration_args(group).len()).collect();
    assert_eq!(sizes, vec![8, 8, 1]);

    let flattened: Vec<Vec<u8>> = submitted.iter().flat_map(|group| registration_args(group)).collect();
    let expected: Vec<Vec<u8>> = desired.iter().map(|account| account.as_bytes().to_vec()).collect();
    assert_eq!(flattened, expected);
}

#[tokio::test]
async fn already_converged_registry_produces_no_submissions() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let (a, b) = (address(1), address(2));
    let ledger = InMemoryLedger::with_registry(vec![a.as_bytes().to_vec(), b.as_bytes().to_vec()]);

    let engine = ReconciliationEngine::new(&client, &ledger, &ledger, &AcceptAll);
    let outcome = engine.run(&[a, b], &operator).await.expect("run");

    match outcome {
        ReconcileOutcome::Submitted { plan, receipts } => {
            assert!(plan.to_add.is_empty());
            assert!(receipts.is_empty());
        }
        other => panic!("expected submission, got {other:?}"),
    }
    assert!(ledger.submitted_groups().is_empty());
}
