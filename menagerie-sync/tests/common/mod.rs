//! Shared test helpers for controller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use menagerie_sync::{ResourceApi, SessionConfig, SessionController, SyncError, SyncResult};
use menagerie_types::{
    Draft, Enclosure, Gender, Person, Record, RecordId, ResourceKind, Specialist, TrackedAnimal,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Operation kinds the fake can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// A call observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ResourceKind),
    Create(ResourceKind),
    Update(ResourceKind, RecordId),
    Delete(ResourceKind, RecordId),
}

/// In-memory record service.
///
/// `list` snapshots the collection before waiting on a queued gate, so a
/// held call returns the data as it was when it was dispatched.
#[derive(Default)]
pub struct FakeApi {
    collections: Mutex<HashMap<ResourceKind, Vec<Record>>>,
    failures: Mutex<HashMap<Op, VecDeque<SyncError>>>,
    list_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, kind: ResourceKind, records: Vec<Record>) {
        self.collections.lock().unwrap().insert(kind, records);
    }

    pub fn stored(&self, kind: ResourceKind) -> Vec<Record> {
        self.collections
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Makes the next call of `op` fail with `error`.
    pub fn fail_next(&self, op: Op, error: SyncError) {
        self.failures
            .lock()
            .unwrap()
            .entry(op)
            .or_default()
            .push_back(error);
    }

    /// Holds the next `list` call open until the returned sender fires.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record_call(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_failure(&self, op: Op) -> Option<SyncError> {
        self.failures
            .lock()
            .unwrap()
            .get_mut(&op)
            .and_then(VecDeque::pop_front)
    }

    fn materialize(&self, draft: &Draft, id: RecordId) -> Record {
        let mut value = serde_json::to_value(draft).unwrap();
        value["id"] = serde_json::Value::String(id.to_string());
        Record::decode(draft.kind(), value).unwrap()
    }
}

#[async_trait]
impl ResourceApi for FakeApi {
    fn describe(&self) -> String {
        "in-memory fake".to_string()
    }

    async fn list(&self, kind: ResourceKind) -> SyncResult<Vec<Record>> {
        self.record_call(Call::List(kind));
        let snapshot = self.stored(kind);
        let gate = self.list_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(err) = self.take_failure(Op::List) {
            return Err(err);
        }
        Ok(snapshot)
    }

    async fn create(&self, draft: &Draft) -> SyncResult<Option<Record>> {
        let kind = draft.kind();
        self.record_call(Call::Create(kind));
        if let Some(err) = self.take_failure(Op::Create) {
            return Err(err);
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = self.materialize(draft, RecordId::new(format!("new-{n}")));
        self.collections
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(record.clone());
        Ok(Some(record))
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> SyncResult<Option<Record>> {
        self.record_call(Call::Update(kind, id.clone()));
        if let Some(err) = self.take_failure(Op::Update) {
            return Err(err);
        }
        let record = self.materialize(draft, id.clone());
        let mut collections = self.collections.lock().unwrap();
        let entries = collections.entry(kind).or_default();
        match entries.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = record.clone(),
            None => {
                return Err(SyncError::Rejected {
                    status: 404,
                    message: Some("not found".to_string()),
                });
            }
        }
        Ok(Some(record))
    }

    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> SyncResult<()> {
        self.record_call(Call::Delete(kind, id.clone()));
        if let Some(err) = self.take_failure(Op::Delete) {
            return Err(err);
        }
        self.collections
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .retain(|r| r.id() != id);
        Ok(())
    }
}

pub fn controller(api: &Arc<FakeApi>) -> SessionController {
    SessionController::new(api.clone(), SessionConfig::default())
}

pub fn person(id: &str, name: &str) -> Record {
    Record::Person(Person {
        id: id.into(),
        name: name.into(),
        email: format!("{}@zoo.org", name.to_lowercase()),
    })
}

pub fn specialist(id: &str, name: &str) -> Record {
    Record::Specialist(Specialist {
        id: id.into(),
        name: name.into(),
        email: format!("{}@zoo.org", name.to_lowercase()),
        specialization: "Reptiles".into(),
        years_of_experience: 3,
    })
}

pub fn enclosure(id: &str, capacity: u32) -> Record {
    Record::Enclosure(Enclosure {
        id: id.into(),
        enclosure_type: "Savanna".into(),
        capacity,
        location: "North".into(),
        name: "Plains".into(),
    })
}

pub fn animal(id: &str, name: &str) -> Record {
    Record::TrackedAnimal(TrackedAnimal {
        id: id.into(),
        name: name.into(),
        species: "Lion".into(),
        age: 4,
        gender: Gender::Female,
    })
}

pub fn rejected(message: &str) -> SyncError {
    SyncError::Rejected {
        status: 400,
        message: Some(message.to_string()),
    }
}

/// Yields until `cond` holds, a bounded number of times.
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition never became true");
}
