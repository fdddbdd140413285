use derive_more::Display;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::RwLock;
use uuid::Uuid;

use crate::model::{
    client::Client, expense::Expense, invoice::Invoice, payroll::Payroll, project::Project,
    task::Task, user::User, work_log::WorkLog,
};

/// A persistable document. Records are stored as raw JSON documents keyed by
/// id, one map per collection, mirroring the managed document store this
/// service fronts.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "no record {} in {}", id, collection)]
    MissingId { collection: &'static str, id: String },

    #[display(fmt = "{}: {}", collection, message)]
    Transport {
        collection: &'static str,
        message: String,
    },
}

impl std::error::Error for StoreError {}

/// One keyed collection of documents.
///
/// Every operation is async and fallible to keep the calling convention of
/// the remote store; the in-process implementation never blocks across an
/// await point.
pub struct Collection<T: Record> {
    records: RwLock<HashMap<String, Value>>,
    _marker: PhantomData<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            _marker: PhantomData,
        }
    }
}

impl<T: Record> Collection<T> {
    fn transport(message: impl ToString) -> StoreError {
        StoreError::Transport {
            collection: T::COLLECTION,
            message: message.to_string(),
        }
    }

    /// Fetch one record by id; `Ok(None)` when absent.
    pub async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.read().map_err(|e| Self::transport(e))?;
        records
            .get(id)
            .map(|v| serde_json::from_value(v.clone()).map_err(|e| Self::transport(e)))
            .transpose()
    }

    /// Fetch the whole collection, unordered.
    pub async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().map_err(|e| Self::transport(e))?;
        records
            .values()
            .map(|v| serde_json::from_value(v.clone()).map_err(|e| Self::transport(e)))
            .collect()
    }

    /// Equality filter on a single top-level document field.
    pub async fn find_eq(
        &self,
        field: &str,
        value: impl Serialize,
        limit: Option<usize>,
    ) -> Result<Vec<T>, StoreError> {
        let needle = serde_json::to_value(value).map_err(|e| Self::transport(e))?;
        let records = self.records.read().map_err(|e| Self::transport(e))?;
        let mut out = Vec::new();
        for doc in records.values() {
            if doc.get(field) == Some(&needle) {
                out.push(serde_json::from_value(doc.clone()).map_err(|e| Self::transport(e))?);
                if limit.is_some_and(|n| out.len() >= n) {
                    break;
                }
            }
        }
        Ok(out)
    }

    /// Insert a record, generating a fresh id unless one is supplied.
    /// Returns the record as persisted, id populated.
    pub async fn create(&self, mut record: T, id: Option<String>) -> Result<T, StoreError> {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
        record.set_id(id.clone());
        let doc = serde_json::to_value(&record).map_err(|e| Self::transport(e))?;
        let mut records = self.records.write().map_err(|e| Self::transport(e))?;
        records.insert(id, doc);
        Ok(record)
    }

    /// Full-record overwrite. Fails when the id is not present.
    pub async fn update(&self, id: &str, mut record: T) -> Result<(), StoreError> {
        record.set_id(id.to_string());
        let doc = serde_json::to_value(&record).map_err(|e| Self::transport(e))?;
        let mut records = self.records.write().map_err(|e| Self::transport(e))?;
        match records.get_mut(id) {
            Some(slot) => {
                *slot = doc;
                Ok(())
            }
            None => Err(StoreError::MissingId {
                collection: T::COLLECTION,
                id: id.to_string(),
            }),
        }
    }

    /// Delete by id; deleting an absent id is a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|e| Self::transport(e))?;
        records.remove(id);
        Ok(())
    }
}

/// All collections the service reads and writes.
#[derive(Default)]
pub struct Database {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
    pub worklogs: Collection<WorkLog>,
    pub payrolls: Collection<Payroll>,
    pub invoices: Collection<Invoice>,
    pub expenses: Collection<Expense>,
    pub clients: Collection<Client>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            phone: None,
            role: None,
            salary_type: None,
            base_salary: 0.0,
            overtime_hourly_rate: None,
            created_at: None,
        }
    }

    #[actix_web::test]
    async fn create_generates_an_id_when_none_supplied() {
        let db = Database::new();
        let created = db.users.create(user("A", "a@x.com"), None).await.unwrap();
        assert!(!created.id.is_empty());
        let fetched = db.users.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "a@x.com");
    }

    #[actix_web::test]
    async fn create_honors_a_supplied_id() {
        let db = Database::new();
        let created = db
            .users
            .create(user("A", "a@x.com"), Some("u-7".into()))
            .await
            .unwrap();
        assert_eq!(created.id, "u-7");
        assert!(db.users.get("u-7").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn get_returns_none_for_unknown_id() {
        let db = Database::new();
        assert!(db.users.get("nope").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn update_fails_on_absent_id() {
        let db = Database::new();
        let err = db.users.update("ghost", user("A", "a@x.com")).await;
        assert!(matches!(err, Err(StoreError::MissingId { .. })));
    }

    #[actix_web::test]
    async fn update_overwrites_the_whole_record() {
        let db = Database::new();
        let created = db.users.create(user("A", "a@x.com"), None).await.unwrap();
        let mut changed = created.clone();
        changed.name = "B".into();
        changed.phone = Some("123".into());
        db.users.update(&created.id, changed).await.unwrap();
        let fetched = db.users.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "B");
        assert_eq!(fetched.phone.as_deref(), Some("123"));
    }

    #[actix_web::test]
    async fn find_eq_filters_and_limits() {
        let db = Database::new();
        db.users.create(user("A", "a@x.com"), None).await.unwrap();
        db.users.create(user("B", "b@x.com"), None).await.unwrap();
        db.users.create(user("C", "b@x.com"), None).await.unwrap();

        let hits = db.users.find_eq("email", "b@x.com", None).await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = db.users.find_eq("email", "b@x.com", Some(1)).await.unwrap();
        assert_eq!(hits.len(), 1);

        let hits = db.users.find_eq("email", "z@x.com", None).await.unwrap();
        assert!(hits.is_empty());
    }

    #[actix_web::test]
    async fn delete_is_a_no_op_on_absent_id() {
        let db = Database::new();
        db.users.delete("ghost").await.unwrap();
    }
}
