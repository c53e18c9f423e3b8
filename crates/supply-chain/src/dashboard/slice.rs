use super::Notice;
use crate::clients::LedgerClient;
use crate::ledger::LedgerRecord;
use crate::model::DocumentId;
use actor_framework::ActorClient;
use tracing::debug;

/// Identifies one load of a dashboard. Later loads carry larger tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

impl LoadToken {
    pub(crate) fn next(self) -> Self {
        LoadToken(self.0 + 1)
    }
}

/// Orders a dashboard's loads against each other and against its own writes.
///
/// A load is accepted only if it was issued after the last load applied and
/// after the last successful local write. A load issued before a write may
/// have read the collection without it; applying it would drop the record the
/// write just put in the cache.
#[derive(Debug, Default)]
pub(crate) struct Loads {
    issued: LoadToken,
    applied: LoadToken,
    written: LoadToken,
}

impl Loads {
    pub(crate) fn issue(&mut self) -> LoadToken {
        self.issued = self.issued.next();
        self.issued
    }

    /// Marks a successful write. Every load issued so far is now stale.
    pub(crate) fn wrote(&mut self) {
        self.written = self.issued;
    }

    pub(crate) fn accept(&mut self, token: LoadToken) -> bool {
        if token <= self.applied || token <= self.written {
            debug!(?token, "Discarding stale load");
            return false;
        }
        self.applied = token;
        true
    }
}

/// Point-in-time copy of one collection, tagged with the load it came from.
///
/// The default slice is empty and carries the zero token: never loaded.
#[derive(Debug, Clone)]
pub struct Slice<T> {
    token: LoadToken,
    records: Vec<T>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            token: LoadToken::default(),
            records: Vec::new(),
        }
    }
}

impl<T: LedgerRecord> Slice<T> {
    pub fn token(&self) -> LoadToken {
        self.token
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &DocumentId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Takes a fetched collection. A failed fetch keeps the previous copy and
    /// reports why.
    pub(crate) fn apply(
        &mut self,
        token: LoadToken,
        fetched: Result<Vec<T>, Notice>,
        notices: &mut Vec<Notice>,
    ) {
        match fetched {
            Ok(records) => {
                debug!(collection = %T::COLLECTION, size = records.len(), "Slice loaded");
                self.token = token;
                self.records = records;
            }
            Err(notice) => notices.push(notice),
        }
    }

    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Swaps in the stored version of a record after an update.
    pub(crate) fn replace(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    pub(crate) fn modify(&mut self, id: &DocumentId, f: impl FnOnce(&mut T)) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            f(record);
        }
    }
}

/// Lists a whole collection for a dashboard.
pub(crate) async fn fetch<T: LedgerRecord>(client: LedgerClient<T>) -> Result<Vec<T>, Notice> {
    client.list().await.map_err(Notice::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;

    fn item(id: &str, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: "Wheat".into(),
            quantity,
            price: 12.5,
        }
    }

    #[test]
    fn test_failed_fetch_keeps_previous_records() {
        let mut slice = Slice::default();
        let mut notices = Vec::new();
        let first = LoadToken::default().next();

        slice.apply(first, Ok(vec![item("inventory_1", 50)]), &mut notices);
        slice.apply(
            first.next(),
            Err(Notice::Failed("Store unavailable".into())),
            &mut notices,
        );

        assert_eq!(slice.token(), first);
        assert_eq!(slice.len(), 1);
        assert_eq!(notices, vec![Notice::Failed("Store unavailable".into())]);
    }

    #[test]
    fn test_loads_apply_in_issue_order_only() {
        let mut loads = Loads::default();
        let older = loads.issue();
        let newer = loads.issue();

        assert!(loads.accept(newer));
        assert!(!loads.accept(older));
        assert!(!loads.accept(newer));
    }

    #[test]
    fn test_write_invalidates_loads_issued_before_it() {
        let mut loads = Loads::default();
        let before = loads.issue();
        loads.wrote();
        assert!(!loads.accept(before));

        let after = loads.issue();
        assert!(loads.accept(after));
    }

    #[test]
    fn test_write_before_any_load_blocks_nothing() {
        let mut loads = Loads::default();
        loads.wrote();
        let first = loads.issue();
        assert!(loads.accept(first));
    }

    #[test]
    fn test_replace_and_modify_by_id() {
        let mut slice = Slice::default();
        slice.push(item("inventory_1", 50));
        slice.push(item("inventory_2", 5));

        slice.replace(item("inventory_1", 40));
        slice.modify(&"inventory_2".into(), |i| i.quantity = 1);
        slice.modify(&"inventory_9".into(), |i| i.quantity = 0);

        assert_eq!(slice.get(&"inventory_1".into()).unwrap().quantity, 40);
        assert_eq!(slice.get(&"inventory_2".into()).unwrap().quantity, 1);
        assert_eq!(slice.len(), 2);
    }
}
