use crate::domain::address::Address;
use crate::domain::operation::Operation;
use crate::foundation::{CoordinatorError, PROGRAM_ADDRESS_PREFIX, PUBKEY_SIZE};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512_256};

/// Authorization artifact for one operation slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub authorizer: Address,
    pub proof: AuthorizationProof,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationProof {
    Ed25519 {
        public_key: [u8; PUBKEY_SIZE],
        signature: Vec<u8>,
    },
    Program {
        bytecode: Vec<u8>,
        args: Vec<Vec<u8>>,
    },
}

/// A fully authorized operation, ready for submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedOperation {
    pub operation: Operation,
    pub authorization: Authorization,
}

/// Direct signing credential for one account.
///
/// The account identifier is the verifying-key bytes; signatures cover the
/// operation's signing payload, group tag included.
#[derive(Clone)]
pub struct KeyCredential {
    key: SigningKey,
}

impl KeyCredential {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn account(&self) -> Address {
        Address::new(self.key.verifying_key().to_bytes())
    }

    pub fn authorize(&self, operation: &Operation) -> Result<Authorization, CoordinatorError> {
        let payload = operation.signing_payload()?;
        let signature = self.key.sign(&payload);
        Ok(Authorization {
            authorizer: self.account(),
            proof: AuthorizationProof::Ed25519 {
                public_key: self.key.verifying_key().to_bytes(),
                signature: signature.to_bytes().to_vec(),
            },
        })
    }
}

/// Delegated authority: a program whose derived account originates
/// operations authorized by the program itself rather than a key.
#[derive(Clone, Debug)]
pub struct ProgramAuthority {
    bytecode: Vec<u8>,
    args: Vec<Vec<u8>>,
}

impl ProgramAuthority {
    pub fn new(bytecode: Vec<u8>) -> Self {
        Self { bytecode, args: Vec::new() }
    }

    pub fn with_args(mut self, args: Vec<Vec<u8>>) -> Self {
        self.args = args;
        self
    }

    /// Account derived from the program bytecode.
    pub fn account(&self) -> Address {
        let mut hasher = Sha512_256::new();
        hasher.update(PROGRAM_ADDRESS_PREFIX);
        hasher.update(&self.bytecode);
        Address::new(hasher.finalize().into())
    }

    pub fn authorize(&self) -> Authorization {
        Authorization {
            authorizer: self.account(),
            proof: AuthorizationProof::Program {
                bytecode: self.bytecode.clone(),
                args: self.args.clone(),
            },
        }
    }
}

/// Check an authorization against its operation.
///
/// Program proofs are accepted when the derived account matches the
/// authorizer; evaluating the program is the network's job.
pub fn verify_authorization(operation: &Operation, authorization: &Authorization) -> Result<bool, CoordinatorError> {
    match &authorization.proof {
        AuthorizationProof::Ed25519 { public_key, signature } => {
            if Address::new(*public_key) != authorization.authorizer {
                return Ok(false);
            }
            let key = match VerifyingKey::from_bytes(public_key) {
                Ok(key) => key,
                Err(_) => return Ok(false),
            };
            let signature = match Signature::from_slice(signature) {
                Ok(signature) => signature,
                Err(_) => return Ok(false),
            };
            let payload = operation.signing_payload()?;
            Ok(key.verify_strict(&payload, &signature).is_ok())
        }
        AuthorizationProof::Program { bytecode, .. } => {
            let mut hasher = Sha512_256::new();
            hasher.update(PROGRAM_ADDRESS_PREFIX);
            hasher.update(bytecode);
            Ok(Address::new(hasher.finalize().into()) == authorization.authorizer)
        }
    }
}
