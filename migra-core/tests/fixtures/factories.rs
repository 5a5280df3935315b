use migra_core::application::AppClient;
use migra_core::domain::{Address, KeyCredential};
use migra_core::foundation::{AppId, AssetId, METHOD_CLAIM};
use migra_core::infrastructure::rpc::{HistoricalRecord, RecordPage};

pub const TEST_APP: AppId = AppId(7);
pub const TEST_ASSET: AssetId = AssetId(11);

pub fn address(seed: u8) -> Address {
    Address::new([seed; 32])
}

pub fn credential(seed: u8) -> KeyCredential {
    KeyCredential::from_seed([seed; 32])
}

pub fn client_for(operator: Address) -> AppClient {
    AppClient::new(TEST_APP, TEST_ASSET, operator, vec![0x01, 0x20, 0x01], vec![0x01, 0x81, 0x01])
}

pub fn claim_record(sender: Address) -> HistoricalRecord {
    HistoricalRecord {
        sender,
        call_args: vec![METHOD_CLAIM.to_vec()],
    }
}

pub fn unrelated_record(sender: Address) -> HistoricalRecord {
    HistoricalRecord {
        sender,
        call_args: vec![b"setup".to_vec()],
    }
}

pub fn page(records: Vec<HistoricalRecord>, next_cursor: Option<&str>) -> RecordPage {
    RecordPage {
        records,
        next_cursor: next_cursor.map(str::to_string),
    }
}
