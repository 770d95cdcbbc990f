use std::io::Write as _;
use std::panic::{self, AssertUnwindSafe};

use serde_json::{Map, Value};

use crate::log::level::Level;
use crate::log::record::Record;

/// Environment variable holding the process-wide default metadata object.
pub const LOG_META_ENV: &str = "LOG_META";

/// Recognized field names, in emit order. Passthrough fields never displace
/// one of these once populated.
const RECOGNIZED: [&str; 9] = [
    "level", "message", "code", "test", "metric", "unit", "op_id", "data", "errors",
];

type Sink = Box<dyn Fn(&str) + Send + Sync>;

/// Serializes log records to single JSON lines through an injectable sink.
///
/// Each call to [`log`](Emitter::log) merges three layers in order: the
/// process-wide default metadata captured at construction, the recognized
/// fields of the [`Record`], and its passthrough fields. The emitter holds no
/// mutable state, so one instance can be shared freely across threads as long
/// as the sink tolerates concurrent writes.
///
/// Logging is best-effort end to end: a record that cannot be serialized, or
/// a sink that fails, is dropped silently rather than surfacing a failure
/// into application control flow.
///
/// # Examples
///
/// ```
/// use stacklog::{Emitter, Record, StackedError};
///
/// let emitter = Emitter::new();
/// let err = StackedError::build(vec!["loading config", "file missing"]);
/// emitter.log(Record::new().message("startup aborted").errors(err));
/// ```
pub struct Emitter {
    meta: Map<String, Value>,
    sink: Sink,
}

impl Emitter {
    /// Creates an emitter with no default metadata, writing to stdout.
    pub fn new() -> Self {
        Self {
            meta: Map::new(),
            sink: stdout_sink(),
        }
    }

    /// Creates an emitter whose default metadata is the given JSON object.
    ///
    /// Anything other than an object falls back to empty metadata; this
    /// constructor never fails.
    pub fn with_meta(meta: Value) -> Self {
        let meta = match meta {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            meta,
            sink: stdout_sink(),
        }
    }

    /// Creates an emitter whose default metadata is read from the `LOG_META`
    /// environment variable.
    ///
    /// An absent, malformed, or non-object value falls back to empty
    /// metadata; startup never fails on bad configuration.
    pub fn from_env() -> Self {
        let meta = std::env::var(LOG_META_ENV)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self {
            meta,
            sink: stdout_sink(),
        }
    }

    /// Replaces the output sink.
    ///
    /// The sink receives one complete JSON object per call, without a
    /// trailing newline. It must tolerate concurrent calls if the emitter is
    /// shared across threads.
    pub fn with_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink = Box::new(sink);
        self
    }

    /// The process-wide default metadata this emitter was built with.
    #[inline]
    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    /// Emits one record as a single JSON line. Never panics.
    pub fn log(&self, record: Record) {
        let mut fields = self.meta.clone();

        fields.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        if let Some(message) = record.message {
            if !message.is_empty() {
                fields.insert("message".to_string(), Value::String(message));
            }
        }
        if let Some(code) = record.code {
            fields.insert("code".to_string(), code);
        }
        if let Some(test) = record.test {
            fields.insert("test".to_string(), Value::Bool(test));
        }
        if let Some(time) = record.time {
            fields.insert("metric".to_string(), time);
            fields.insert("unit".to_string(), Value::String("ms".to_string()));
        } else if let Some(metric) = record.metric {
            fields.insert("metric".to_string(), metric);
            if let Some(unit) = record.unit {
                fields.insert("unit".to_string(), Value::String(unit));
            }
        }
        if let Some(op_id) = record.op_id {
            fields.insert("op_id".to_string(), Value::String(op_id));
        }
        if let Some(data) = record.data {
            fields.insert("data".to_string(), data);
        }
        if let Some(errors) = record.errors {
            if let Some(text) = errors.resolve() {
                fields.insert("errors".to_string(), Value::String(text));
            }
        }

        for (key, value) in record.extra {
            if RECOGNIZED.contains(&key.as_str()) && fields.contains_key(&key) {
                continue;
            }
            fields.insert(key, value);
        }

        if let Ok(line) = serde_json::to_string(&Value::Object(fields)) {
            let sink = &self.sink;
            let _ = panic::catch_unwind(AssertUnwindSafe(|| sink(&line)));
        }
    }

    /// Emits a bare `INFO` message.
    #[inline]
    pub fn info<S: Into<String>>(&self, message: S) {
        self.log(Record::new().level(Level::Info).message(message));
    }

    /// Emits a bare `WARN` message.
    #[inline]
    pub fn warn<S: Into<String>>(&self, message: S) {
        self.log(Record::new().level(Level::Warn).message(message));
    }

    /// Emits a bare `ERROR` message.
    #[inline]
    pub fn error<S: Into<String>>(&self, message: S) {
        self.log(Record::new().level(Level::Error).message(message));
    }

    /// Emits a bare `CRITICAL` message.
    #[inline]
    pub fn critical<S: Into<String>>(&self, message: S) {
        self.log(Record::new().level(Level::Critical).message(message));
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

fn stdout_sink() -> Sink {
    Box::new(|line| {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{line}");
    })
}

/// Generates a fresh operation correlation id (random, hex, 32 chars).
pub fn fresh_op_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
