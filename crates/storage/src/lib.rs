use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::domain::{Member, MemberId};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("member {0} not found")]
    NotFound(MemberId),
    #[error("member store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Default)]
struct MemberTable {
    // Kept in insertion order, which is also ascending id order.
    members: Vec<Member>,
    last_id: i64,
}

/// In-memory member registry. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    table: Arc<RwLock<MemberTable>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, username: &str, age: i32) -> Result<Member> {
        let mut table = self.write()?;
        table.last_id += 1;
        let member = Member {
            id: MemberId(table.last_id),
            username: username.to_string(),
            age,
        };
        table.members.push(member.clone());
        debug!(member_id = %member.id, username = %member.username, age, "member saved");
        Ok(member)
    }

    pub fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.read()?.members.clone())
    }

    pub fn find_by_id(&self, id: MemberId) -> Result<Member> {
        let table = self.read()?;
        table
            .members
            .binary_search_by_key(&id, |member| member.id)
            .map(|idx| table.members[idx].clone())
            .map_err(|_| StoreError::NotFound(id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.members.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Drops every record. The id sequence keeps counting.
    pub fn clear_store(&self) -> Result<()> {
        self.write()?.members.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemberTable>> {
        self.table.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemberTable>> {
        self.table.write().map_err(|_| StoreError::Poisoned)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
