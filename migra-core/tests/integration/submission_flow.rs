use crate::fixtures::{address, client_for, credential};
use migra_core::application::pipeline;
use migra_core::domain::{Operation, OperationPayload, ProgramAuthority, TransactionGroup};
use migra_core::infrastructure::rpc::InMemoryLedger;
use migra_core::CoordinatorError;

#[tokio::test]
async fn create_flow_reaches_finality() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let ledger = InMemoryLedger::new();
    ledger.set_confirmed_round(120);

    let mut group = client.create_application().expect("create");
    group.authorize(&operator, None).expect("authorize");

    let outcome = pipeline::submit(&ledger, &group, true).await.expect("submit");
    let finality = outcome.finality.expect("finality awaited");
    assert_eq!(finality.confirmed_round, 120);
    assert_eq!(finality.operation_ids.len(), 1);
    assert_eq!(ledger.submitted_groups().len(), 1);
}

#[tokio::test]
async fn unauthorized_group_never_reaches_the_network() {
    let operator = credential(0xC1);
    let client = client_for(operator.account());
    let ledger = InMemoryLedger::new();

    let group = client.fund_application(1_000_000).expect("fund");
    let err = pipeline::submit(&ledger, &group, false).await.expect_err("must fail");
    assert!(matches!(err, CoordinatorError::IncompleteAuthorization { missing: 1 }));
    assert!(ledger.submitted_groups().is_empty());
}

#[tokio::test]
async fn non_matching_credential_fills_nothing() {
    let operator = credential(0xC1);
    let stranger = credential(0xD2);
    let client = client_for(operator.account());
    let ledger = InMemoryLedger::new();

    let mut group = client.fund_application(1_000_000).expect("fund");
    group.authorize(&stranger, None).expect("authorize");

    let err = pipeline::submit(&ledger, &group, false).await.expect_err("must fail");
    assert!(matches!(err, CoordinatorError::IncompleteAuthorization { missing: 1 }));
    assert!(ledger.submitted_groups().is_empty());
}

#[tokio::test]
async fn multi_party_group_is_authorized_per_origin() {
    let alice = credential(0xA1);
    let bob = credential(0xB2);
    let ledger = InMemoryLedger::new();

    let from_alice = TransactionGroup::build(vec![Operation::new(
        alice.account(),
        OperationPayload::Payment {
            receiver: address(0xFE),
            amount: 5,
        },
    )])
    .expect("build");
    let from_bob = TransactionGroup::build(vec![Operation::new(
        bob.account(),
        OperationPayload::Payment {
            receiver: address(0xFE),
            amount: 7,
        },
    )])
    .expect("build");

    let mut group = from_alice.merge(from_bob).expect("merge");
    group.authorize(&alice, None).expect("authorize alice");
    assert_eq!(group.missing_authorizations(), vec![1]);
    group.authorize(&bob, None).expect("authorize bob");

    let outcome = pipeline::submit(&ledger, &group, false).await.expect("submit");
    assert!(outcome.finality.is_none());
    let submitted = ledger.submitted_groups();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].len(), 2);
}

#[tokio::test]
async fn program_authority_covers_its_derived_account() {
    let authority = ProgramAuthority::new(vec![0x01, 0x81, 0x01]);
    let ledger = InMemoryLedger::new();

    let mut group = TransactionGroup::build(vec![Operation::new(
        authority.account(),
        OperationPayload::Payment {
            receiver: address(0xFE),
            amount: 3,
        },
    )])
    .expect("build");
    group.authorize_with_program(&authority);

    pipeline::submit(&ledger, &group, false).await.expect("submit");
    assert_eq!(ledger.submitted_groups().len(), 1);
}
