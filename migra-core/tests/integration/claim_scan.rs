use crate::fixtures::{address, claim_record, page, unrelated_record, TEST_ASSET};
use migra_core::application::readers;
use migra_core::infrastructure::rpc::InMemoryLedger;

#[tokio::test]
async fn scan_follows_cursors_until_a_page_has_none() {
    let ledger = InMemoryLedger::new();
    let (a, b, funding) = (address(1), address(2), address(0xF0));
    ledger.set_pages(vec![
        page(vec![claim_record(a), unrelated_record(address(9))], Some("1")),
        page(vec![claim_record(b), claim_record(a)], Some("2")),
        page(vec![], None),
    ]);

    let claimed = readers::list_claimed_accounts(&ledger, &funding, TEST_ASSET).await.expect("scan");

    assert_eq!(ledger.fetch_count(), 3);
    assert_eq!(claimed.len(), 2);
    assert!(claimed.contains(&a));
    assert!(claimed.contains(&b));
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let ledger = InMemoryLedger::new();
    let claimed = readers::list_claimed_accounts(&ledger, &address(0xF0), TEST_ASSET).await.expect("scan");
    assert!(claimed.is_empty());
    assert_eq!(ledger.fetch_count(), 1);
}

#[tokio::test]
async fn rescan_is_idempotent() {
    let ledger = InMemoryLedger::new();
    let a = address(1);
    ledger.set_pages(vec![page(vec![claim_record(a)], None)]);

    let first = readers::list_claimed_accounts(&ledger, &address(0xF0), TEST_ASSET).await.expect("scan");
    let second = readers::list_claimed_accounts(&ledger, &address(0xF0), TEST_ASSET).await.expect("rescan");
    assert_eq!(first, second);
}
