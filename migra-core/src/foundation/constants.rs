//! System-wide constants for the migra coordinator.

/// Base units per display token (10^6).
///
/// Display-unit amounts are scaled by this factor and truncated; the
/// distributed asset declares six decimal places.
pub const BASE_UNITS_PER_TOKEN: u64 = 1_000_000;

/// Raw public key size in bytes.
pub const PUBKEY_SIZE: usize = 32;

/// Registry key width in bytes (the binary account identifier).
pub const REGISTRY_KEY_SIZE: usize = 32;

/// Address checksum size in bytes (trailing bytes of SHA-512/256 of the key).
pub const ADDRESS_CHECKSUM_SIZE: usize = 4;

/// Encoded address length in base32 characters (36 bytes, 5 bits per character).
pub const ADDRESS_STRING_LENGTH: usize = 58;

/// Maximum registry references a single operation may carry.
///
/// The network rejects operations above this ceiling; the reconciliation
/// engine chunks its additions accordingly.
pub const MAX_REFERENCES_PER_OPERATION: usize = 8;

/// Flat fee for a plain operation, in base units.
pub const FLAT_OPERATION_FEE: u64 = 1_000;

/// Fee for operations whose execution issues an inner transfer (claim,
/// setup, delete); covers the inner operation's fee as well.
pub const INNER_TRANSFER_OPERATION_FEE: u64 = 2_000;

/// Claim-note nonce length in bytes.
///
/// Distinguishes byte-identical claim resubmissions for network-level
/// deduplication; duplicate-claim protection itself lives in the
/// application's own state.
pub const CLAIM_NOTE_LENGTH: usize = 10;

/// Domain prefix fed into operation digests.
pub const OPERATION_DIGEST_PREFIX: &[u8] = b"TX";

/// Domain prefix fed into group-linkage digests.
pub const GROUP_DIGEST_PREFIX: &[u8] = b"TG";

/// Domain prefix for accounts derived from program bytecode.
pub const PROGRAM_ADDRESS_PREFIX: &[u8] = b"Program";

/// Domain prefix for application funding accounts.
pub const APPLICATION_ADDRESS_PREFIX: &[u8] = b"appID";

/// Method selectors understood by the registry application.
pub const METHOD_SETUP: &[u8] = b"setup";
pub const METHOD_ADD_RECIPIENTS: &[u8] = b"add_recipients";
pub const METHOD_CLAIM: &[u8] = b"claim_nft";

/// Interval between pending-submission polls while waiting for finality.
pub const FINALITY_POLL_INTERVAL_MS: u64 = 500;

/// Maximum pending-submission polls before giving up on finality.
pub const MAX_FINALITY_POLLS: u32 = 40;

/// Environment variable naming the configuration file path.
pub const CONFIG_PATH_ENV: &str = "MIGRA_CONFIG";

/// Environment variable carrying the operator's 32-byte signing seed (hex).
pub const CREDENTIAL_SEED_ENV: &str = "MIGRA_OPERATOR_SEED";
