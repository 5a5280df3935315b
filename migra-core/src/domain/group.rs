//! Atomic transaction groups.
//!
//! A group is an ordered operation list sharing one linkage tag, computed as
//! a digest over the cleared, ordered members. Rebuilding from operations
//! that belonged to another group never leaves stale cross-links: tags are
//! wiped before the digest runs.

use crate::domain::address::Address;
use crate::domain::operation::Operation;
use crate::domain::signing::{Authorization, KeyCredential, ProgramAuthority, SignedOperation};
use crate::foundation::{CoordinatorError, GroupTag, GROUP_DIGEST_PREFIX};
use bincode::Options;

#[derive(Clone, Debug)]
pub struct TransactionGroup {
    operations: Vec<Operation>,
    authorizations: Vec<Option<Authorization>>,
}

impl TransactionGroup {
    /// Link an ordered operation list into a group.
    ///
    /// Any pre-existing linkage tag on a member is cleared before the group
    /// digest is computed; the fresh tag is written onto every member and
    /// the authorization slots start empty.
    pub fn build(mut operations: Vec<Operation>) -> Result<Self, CoordinatorError> {
        if operations.is_empty() {
            return Err(CoordinatorError::EmptyGroup);
        }
        for operation in &mut operations {
            operation.group = None;
        }
        let tag = compute_group_tag(&operations)?;
        for operation in &mut operations {
            operation.group = Some(tag);
        }
        let slots = operations.len();
        Ok(Self {
            operations,
            authorizations: vec![None; slots],
        })
    }

    /// Concatenate two groups into a new one with a fresh tag.
    ///
    /// Both inputs are consumed; their old tags no longer name a real group.
    pub fn merge(self, other: Self) -> Result<Self, CoordinatorError> {
        let mut operations = self.operations;
        operations.extend(other.operations);
        Self::build(operations)
    }

    /// Current linkage tag, absent only for a group with no members.
    pub fn tag(&self) -> Option<GroupTag> {
        self.operations.first().and_then(|operation| operation.group)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn authorizations(&self) -> &[Option<Authorization>] {
        &self.authorizations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Fill the slots of every operation originated by the credential's
    /// account (or `origin_override` when given). Non-matching slots are
    /// left untouched; re-running re-derives the same artifact.
    pub fn authorize(
        &mut self,
        credential: &KeyCredential,
        origin_override: Option<Address>,
    ) -> Result<&mut Self, CoordinatorError> {
        let target = origin_override.unwrap_or_else(|| credential.account());
        for (index, operation) in self.operations.iter().enumerate() {
            if operation.origin == target {
                self.authorizations[index] = Some(credential.authorize(operation)?);
            }
        }
        Ok(self)
    }

    /// Same matching rule as [`authorize`](Self::authorize), for operations
    /// originated by a program's derived account.
    pub fn authorize_with_program(&mut self, authority: &ProgramAuthority) -> &mut Self {
        let target = authority.account();
        for (index, operation) in self.operations.iter().enumerate() {
            if operation.origin == target {
                self.authorizations[index] = Some(authority.authorize());
            }
        }
        self
    }

    pub fn missing_authorizations(&self) -> Vec<usize> {
        self.authorizations
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
            .collect()
    }

    /// The ordered, fully authorized operation list ready for submission.
    pub fn authorized_operations(&self) -> Result<Vec<SignedOperation>, CoordinatorError> {
        let missing = self.missing_authorizations();
        if !missing.is_empty() {
            return Err(CoordinatorError::IncompleteAuthorization { missing: missing.len() });
        }
        Ok(self
            .operations
            .iter()
            .zip(&self.authorizations)
            .map(|(operation, authorization)| SignedOperation {
                operation: operation.clone(),
                authorization: authorization.clone().expect("slot checked above"),
            })
            .collect())
    }
}

fn compute_group_tag(operations: &[Operation]) -> Result<GroupTag, CoordinatorError> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(GROUP_DIGEST_PREFIX);
    for operation in operations {
        let encoded = bincode::DefaultOptions::new().with_fixint_encoding().serialize(operation)?;
        hasher.update(&encoded);
    }
    Ok(GroupTag::from(*hasher.finalize().as_bytes()))
}
