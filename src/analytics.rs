use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::types::DifficultyLevel;

const CHANNEL_CAPACITY: usize = 1024;

/// Interaction kinds the AR layer can report for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Touch,
    Voice,
    Gesture,
    Gaze,
    Drag,
    Pinch,
    Rotate,
    Scale,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Touch => "touch",
            Self::Voice => "voice",
            Self::Gesture => "gesture",
            Self::Gaze => "gaze",
            Self::Drag => "drag",
            Self::Pinch => "pinch",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum SessionEvent {
    #[serde(rename = "SESSION_STARTED")]
    SessionStarted(SessionStartedRecord),

    #[serde(rename = "CONTENT_GENERATED")]
    ContentGenerated(ContentGeneratedRecord),

    #[serde(rename = "FALLBACK_SERVED")]
    FallbackServed(FallbackServedRecord),

    #[serde(rename = "INTERACTION_RECORDED")]
    InteractionRecorded(InteractionRecord),

    #[serde(rename = "SESSION_ENDED")]
    SessionEnded(SessionEndedRecord),
}

impl SessionEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SessionStarted(_) => "SESSION_STARTED",
            SessionEvent::ContentGenerated(_) => "CONTENT_GENERATED",
            SessionEvent::FallbackServed(_) => "FALLBACK_SERVED",
            SessionEvent::InteractionRecorded(_) => "INTERACTION_RECORDED",
            SessionEvent::SessionEnded(_) => "SESSION_ENDED",
        }
    }

    pub fn student_id(&self) -> &str {
        match self {
            SessionEvent::SessionStarted(r) => &r.student_id,
            SessionEvent::ContentGenerated(r) => &r.student_id,
            SessionEvent::FallbackServed(r) => &r.student_id,
            SessionEvent::InteractionRecorded(r) => &r.student_id,
            SessionEvent::SessionEnded(r) => &r.student_id,
        }
    }

    pub fn session_id(&self) -> &str {
        match self {
            SessionEvent::SessionStarted(r) => &r.session_id,
            SessionEvent::ContentGenerated(r) => &r.session_id,
            SessionEvent::FallbackServed(r) => &r.session_id,
            SessionEvent::InteractionRecorded(r) => &r.session_id,
            SessionEvent::SessionEnded(r) => &r.session_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartedRecord {
    pub student_id: String,
    pub session_id: String,
    pub subject: String,
    pub concept: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGeneratedRecord {
    pub student_id: String,
    pub session_id: String,
    pub subject: String,
    pub concept: String,
    pub difficulty: DifficultyLevel,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackServedRecord {
    pub student_id: String,
    pub session_id: String,
    pub subject: String,
    pub concept: String,
    pub failure_kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub student_id: String,
    pub session_id: String,
    pub interaction: InteractionType,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRecord {
    pub student_id: String,
    pub session_id: String,
    pub completed_activities: u32,
    pub passed_checkpoints: u32,
    pub duration_seconds: u64,
}

/// A published event with its delivery identity and wall-clock receipt time.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: String,
    pub event: SessionEvent,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(event: SessionEvent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event,
            created_at: Utc::now(),
        }
    }
}

/// Destination for session records. Implementations must not block:
/// the pipeline calls `record` fire-and-forget and never awaits delivery.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: SessionEvent);
}

/// Sink that discards every record. Used when the embedding application
/// wires no analytics.
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: SessionEvent) {}
}

type SubscriberId = String;

struct Subscriber {
    student_id: Option<String>,
    session_id: Option<String>,
    event_types: Option<Vec<String>>,
    sender: broadcast::Sender<SessionRecord>,
}

impl Subscriber {
    fn matches(&self, record: &SessionRecord) -> bool {
        if let Some(ref student_id) = self.student_id {
            if record.event.student_id() != student_id {
                return false;
            }
        }

        if let Some(ref session_id) = self.session_id {
            if record.event.session_id() != session_id {
                return false;
            }
        }

        if let Some(ref event_types) = self.event_types {
            if !event_types.contains(&record.event.event_type().to_string()) {
                return false;
            }
        }

        true
    }
}

/// In-process record bus. Publishing is synchronous, so records for one
/// session arrive at every subscriber in publish order; consumers receive
/// asynchronously over broadcast channels.
pub struct SessionEventBus {
    global_sender: broadcast::Sender<SessionRecord>,
    subscribers: RwLock<HashMap<SubscriberId, Subscriber>>,
    event_count: RwLock<u64>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        let (global_sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            global_sender,
            subscribers: RwLock::new(HashMap::new()),
            event_count: RwLock::new(0),
        }
    }

    pub fn publish(&self, event: SessionEvent) {
        let record = SessionRecord::new(event);
        let event_type = record.event.event_type();
        let session_id = record.event.session_id().to_string();

        {
            let mut count = self.event_count.write();
            *count += 1;
        }

        let subscribers = self.subscribers.read();
        let mut sent_count = 0usize;

        for subscriber in subscribers.values() {
            if subscriber.matches(&record) && subscriber.sender.send(record.clone()).is_ok() {
                sent_count += 1;
            }
        }

        if self.global_sender.send(record.clone()).is_err() {
            debug!("no global subscribers for session record");
        }

        debug!(
            event_type = event_type,
            session_id = %session_id,
            sent_to = sent_count,
            "session record published"
        );
    }

    pub fn subscribe_global(&self) -> broadcast::Receiver<SessionRecord> {
        self.global_sender.subscribe()
    }

    pub fn subscribe_filtered(
        &self,
        student_id: Option<String>,
        session_id: Option<String>,
        event_types: Option<Vec<String>>,
    ) -> (SubscriberId, broadcast::Receiver<SessionRecord>) {
        let (sender, receiver) = broadcast::channel(CHANNEL_CAPACITY);
        let subscriber_id = uuid::Uuid::new_v4().to_string();

        let subscriber = Subscriber {
            student_id,
            session_id,
            event_types,
            sender,
        };

        self.subscribers
            .write()
            .insert(subscriber_id.clone(), subscriber);

        debug!(subscriber_id = %subscriber_id, "filtered subscription created");

        (subscriber_id, receiver)
    }

    pub fn unsubscribe(&self, subscriber_id: &str) {
        if self.subscribers.write().remove(subscriber_id).is_some() {
            debug!(subscriber_id = %subscriber_id, "subscription removed");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len() + self.global_sender.receiver_count()
    }

    pub fn event_count(&self) -> u64 {
        *self.event_count.read()
    }

    pub fn stats(&self) -> SessionBusStats {
        SessionBusStats {
            total_events: self.event_count(),
            subscriber_count: self.subscriber_count(),
            global_subscribers: self.global_sender.receiver_count(),
            filtered_subscribers: self.subscribers.read().len(),
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsSink for SessionEventBus {
    fn record(&self, event: SessionEvent) {
        self.publish(event);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionBusStats {
    pub total_events: u64,
    pub subscriber_count: usize,
    pub global_subscribers: usize,
    pub filtered_subscribers: usize,
}
