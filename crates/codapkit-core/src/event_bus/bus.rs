//! The event bus.
//!
//! Handlers are kept in a registry in subscription order. Publishing runs
//! every matching handler on the caller's thread, then forwards the event
//! to the broadcast channel for async consumers.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self.0.simple().to_string();
        write!(f, "sub-{}", &id[..8])
    }
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Any event whose category is listed.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Arc<dyn Fn(AppEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Event bus tunables.
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Capacity of the broadcast channel.
    pub channel_capacity: usize,
    /// Number of published events kept in the journal; 0 disables it.
    pub journal_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            journal_size: 0,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Neither handlers nor receivers are registered.
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Publish/subscribe hub shared between a widget layer and its views.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscribers: RwLock<Vec<Subscriber>>,
    journal: Mutex<VecDeque<(u64, AppEvent)>>,
    published: Mutex<u64>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            subscribers: RwLock::new(Vec::new()),
            journal: Mutex::new(VecDeque::with_capacity(config.journal_size)),
            published: Mutex::new(0),
            config,
        }
    }

    /// Deliver `event` to every matching handler, then to async receivers.
    ///
    /// Handlers run in subscription order before this returns. The registry
    /// is not locked while they run, so a handler may publish, subscribe or
    /// unsubscribe in turn.
    ///
    /// Returns the number of async receivers reached.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        let seq = {
            let mut published = self.published.lock();
            *published += 1;
            *published
        };
        self.record(seq, &event);

        let handlers: Vec<Handler> = self
            .subscribers
            .read()
            .iter()
            .filter(|s| s.filter.matches(&event))
            .map(|s| Arc::clone(&s.handler))
            .collect();

        tracing::trace!("Event #{} {} -> {} handler(s)", seq, event.description(), handlers.len());
        for handler in &handlers {
            handler(event.clone());
        }

        match self.sender.send(event) {
            Ok(receivers) => Ok(receivers),
            Err(_) if self.subscribers.read().is_empty() => Err(EventBusError::NoSubscribers),
            Err(_) => Ok(0),
        }
    }

    /// Register a handler called synchronously for each matching event.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        tracing::debug!("Subscribing {} to {:?}", id, filter);
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Arc::new(handler),
        });
        id
    }

    /// Remove a handler. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let Some(index) = subscribers.iter().position(|s| s.id == id) else {
            return false;
        };
        subscribers.remove(index);
        tracing::debug!("Unsubscribed {}", id);
        true
    }

    /// A receiver for polling events from an async task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Number of events published so far.
    pub fn published_count(&self) -> u64 {
        *self.published.lock()
    }

    /// Journaled events with a sequence number greater than `after`,
    /// oldest first. Sequence numbers start at 1.
    pub fn journal_since(&self, after: u64) -> Vec<(u64, AppEvent)> {
        self.journal
            .lock()
            .iter()
            .filter(|(seq, _)| *seq > after)
            .cloned()
            .collect()
    }

    pub fn clear_journal(&self) {
        self.journal.lock().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, seq: u64, event: &AppEvent) {
        if self.config.journal_size == 0 {
            return;
        }
        let mut journal = self.journal.lock();
        if journal.len() == self.config.journal_size {
            journal.pop_front();
        }
        journal.push_back((seq, event.clone()));
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("published", &self.published_count())
            .field("config", &self.config)
            .finish()
    }
}
