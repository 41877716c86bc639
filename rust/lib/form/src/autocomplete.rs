//! Debounced search-as-you-type for relation fields.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use staykit_client::{ApiClient, ApiError, AutocompleteItem, ResourceClient};
use tracing::{debug, warn};

use crate::widget::Relation;

/// Quiet period before a typed query is sent.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds the latest query until it has been stable for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Queue a query; replaces whatever was pending and restarts the timer.
    pub fn push(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending query once its quiet period is over.
    pub fn due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
                self.pending.take().map(|(q, _)| q)
            }
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.delay.saturating_sub(now.saturating_duration_since(*at)))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Backend for relation suggestions.
#[async_trait::async_trait]
pub trait AutocompleteSource: Send + Sync {
    async fn autocomplete(
        &self,
        relation: Relation,
        query: &str,
        filters: &Map<String, Value>,
    ) -> Result<Vec<AutocompleteItem>, ApiError>;
}

#[async_trait::async_trait]
impl AutocompleteSource for ApiClient {
    async fn autocomplete(
        &self,
        relation: Relation,
        query: &str,
        filters: &Map<String, Value>,
    ) -> Result<Vec<AutocompleteItem>, ApiError> {
        let client = ResourceClient::new(self.clone(), relation.resource());
        Ok(client.autocomplete(query, filters).await?.data)
    }
}

/// Popover picker for `account` / `property` / `booking` references.
#[derive(Debug, Clone)]
pub struct RelationSelect {
    relation: Relation,
    filters: Map<String, Value>,
    open: bool,
    query: String,
    debouncer: Debouncer,
    results: Vec<AutocompleteItem>,
    selected: Option<AutocompleteItem>,
    error: Option<String>,
}

impl RelationSelect {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            filters: Map::new(),
            open: false,
            query: String::new(),
            debouncer: Debouncer::default(),
            results: Vec::new(),
            selected: None,
            error: None,
        }
    }

    /// Restrict suggestions to one `resource_type`.
    pub fn resource_type(mut self, resource_type: Option<String>) -> Self {
        match resource_type {
            Some(t) => self.filters.insert("resource_type".to_string(), Value::String(t)),
            None => self.filters.remove("resource_type"),
        };
        self
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn placeholder(&self) -> &'static str {
        self.relation.placeholder()
    }

    pub fn filters(&self) -> &Map<String, Value> {
        &self.filters
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[AutocompleteItem] {
        &self.results
    }

    pub fn selected(&self) -> Option<&AutocompleteItem> {
        self.selected.as_ref()
    }

    /// Last fetch failure, cleared by the next successful fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opening queues the current query so the list fills in.
    pub fn open(&mut self, now: Instant) {
        self.open = true;
        self.debouncer.push(self.query.clone(), now);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.debouncer.cancel();
    }

    pub fn type_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.debouncer.push(self.query.clone(), now);
    }

    /// Query ready to send, if the popover is open and typing has settled.
    pub fn due_query(&mut self, now: Instant) -> Option<String> {
        if !self.open {
            return None;
        }
        self.debouncer.due(now)
    }

    /// Run the due query, if any. Returns whether a request was made.
    pub async fn fetch_due(&mut self, source: &dyn AutocompleteSource, now: Instant) -> bool {
        let Some(query) = self.due_query(now) else {
            return false;
        };
        debug!(relation = ?self.relation, query = %query, "relation autocomplete");
        match source.autocomplete(self.relation, &query, &self.filters).await {
            Ok(items) => {
                self.results = items;
                self.error = None;
            }
            Err(e) => {
                warn!(relation = ?self.relation, error = %e, "relation autocomplete failed");
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Pick a suggestion; returns the id to emit and closes the popover.
    pub fn select(&mut self, id: &str) -> Option<Value> {
        let item = self.results.iter().find(|i| i.id == id)?.clone();
        let value = Value::String(item.id.clone());
        self.selected = Some(item);
        self.close();
        Some(value)
    }

    pub fn clear(&mut self) -> Value {
        self.selected = None;
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeSource {
        calls: Mutex<Vec<(Relation, String, Map<String, Value>)>>,
        fail: bool,
    }

    impl FakeSource {
        fn new() -> Self {
            Self { calls: Mutex::new(Vec::new()), fail: false }
        }
    }

    #[async_trait::async_trait]
    impl AutocompleteSource for FakeSource {
        async fn autocomplete(
            &self,
            relation: Relation,
            query: &str,
            filters: &Map<String, Value>,
        ) -> Result<Vec<AutocompleteItem>, ApiError> {
            self.calls.lock().unwrap().push((relation, query.to_string(), filters.clone()));
            if self.fail {
                return Err(ApiError::Server { status: 500, message: "boom".into() });
            }
            Ok(vec![AutocompleteItem {
                id: format!("{}_1", relation.resource()),
                label: format!("match for {:?}", query),
                description: None,
            }])
        }
    }

    #[test]
    fn debouncer_waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.push("s", t0);
        d.push("se", t0 + Duration::from_millis(100));
        assert_eq!(d.due(t0 + Duration::from_millis(350)), None);
        assert_eq!(d.remaining(t0 + Duration::from_millis(350)), Some(Duration::from_millis(50)));
        assert_eq!(d.due(t0 + Duration::from_millis(400)), Some("se".to_string()));
        assert!(!d.is_pending());
        assert_eq!(d.due(t0 + Duration::from_millis(900)), None);
    }

    #[test]
    fn closed_popover_sends_nothing() {
        let t0 = Instant::now();
        let mut select = RelationSelect::new(Relation::Account);
        select.type_query("sea", t0);
        assert_eq!(select.due_query(t0 + DEBOUNCE), None);

        select.open(t0);
        select.close();
        assert_eq!(select.due_query(t0 + DEBOUNCE), None);
    }

    #[tokio::test]
    async fn fetch_replaces_results_and_forwards_filters() {
        let t0 = Instant::now();
        let source = FakeSource::new();
        let mut select = RelationSelect::new(Relation::Account).resource_type(Some("owner".into()));

        select.open(t0);
        assert!(!select.fetch_due(&source, t0).await);
        assert!(select.fetch_due(&source, t0 + DEBOUNCE).await);

        select.type_query("sea", t0 + Duration::from_millis(400));
        assert!(select.fetch_due(&source, t0 + Duration::from_millis(700)).await);

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, "");
        assert_eq!(calls[1].1, "sea");
        assert_eq!(calls[1].2.get("resource_type"), Some(&Value::from("owner")));
        drop(calls);

        assert_eq!(select.results().len(), 1);
        assert_eq!(select.results()[0].label, "match for \"sea\"");
    }

    #[tokio::test]
    async fn select_emits_id_and_closes() {
        let t0 = Instant::now();
        let source = FakeSource::new();
        let mut select = RelationSelect::new(Relation::Property);
        select.open(t0);
        select.fetch_due(&source, t0 + DEBOUNCE).await;

        assert_eq!(select.select("nope"), None);
        assert_eq!(select.select("property_1"), Some(Value::from("property_1")));
        assert!(!select.is_open());
        assert_eq!(select.selected().map(|i| i.id.as_str()), Some("property_1"));
    }

    #[tokio::test]
    async fn failures_keep_previous_results() {
        let t0 = Instant::now();
        let mut source = FakeSource::new();
        let mut select = RelationSelect::new(Relation::Booking);
        select.open(t0);
        select.fetch_due(&source, t0 + DEBOUNCE).await;
        assert_eq!(select.results().len(), 1);

        source.fail = true;
        select.type_query("x", t0 + DEBOUNCE);
        assert!(select.fetch_due(&source, t0 + DEBOUNCE * 2).await);
        assert_eq!(select.results().len(), 1);
        assert!(select.error().is_some());
    }
}
