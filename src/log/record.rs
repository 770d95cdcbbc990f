use serde::Serialize;
use serde_json::{Map, Value};

use crate::log::level::Level;
use crate::types::{AtomicFailure, StackedError};

/// The `errors` field of a log record, resolved to one text block at emit
/// time.
///
/// Resolution never fails: a [`StackedError`] contributes its full
/// `stringify()` rendering, plain text passes through verbatim, and a list
/// resolves each element and joins them with newlines. An empty list
/// contributes nothing, which omits the field entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorsValue {
    /// A flattened stack, rendered via `stringify()`.
    Stacked(StackedError),
    /// Pre-rendered text, passed through verbatim.
    Text(String),
    /// A mixed sequence, resolved element-wise and newline-joined.
    List(Vec<ErrorsValue>),
}

impl ErrorsValue {
    /// Renders a foreign error's display text as a list element.
    #[inline]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        ErrorsValue::Text(error.to_string())
    }

    /// Resolves to the emitted text, or `None` when there is nothing to
    /// contribute.
    pub fn resolve(&self) -> Option<String> {
        match self {
            ErrorsValue::Stacked(error) => Some(error.stringify()),
            ErrorsValue::Text(text) => Some(text.clone()),
            ErrorsValue::List(items) if items.is_empty() => None,
            ErrorsValue::List(items) => Some(
                items
                    .iter()
                    .map(|item| item.resolve().unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
}

impl From<StackedError> for ErrorsValue {
    #[inline]
    fn from(error: StackedError) -> Self {
        ErrorsValue::Stacked(error)
    }
}

impl From<AtomicFailure> for ErrorsValue {
    #[inline]
    fn from(failure: AtomicFailure) -> Self {
        ErrorsValue::Text(failure.message().to_string())
    }
}

impl From<String> for ErrorsValue {
    #[inline]
    fn from(text: String) -> Self {
        ErrorsValue::Text(text)
    }
}

impl From<&str> for ErrorsValue {
    #[inline]
    fn from(text: &str) -> Self {
        ErrorsValue::Text(text.to_string())
    }
}

impl From<Vec<ErrorsValue>> for ErrorsValue {
    #[inline]
    fn from(items: Vec<ErrorsValue>) -> Self {
        ErrorsValue::List(items)
    }
}

/// One log call's worth of fields, built fresh per
/// [`Emitter::log`](crate::log::Emitter::log) invocation.
///
/// Unset fields are omitted from the emitted line. Values that fail to
/// serialize are dropped at the builder boundary rather than failing the
/// whole record.
///
/// # Examples
///
/// ```
/// use stacklog::{Emitter, Level, Record};
///
/// let emitter = Emitter::new();
/// emitter.log(
///     Record::new()
///         .level(Level::Warn)
///         .message("replica lagging")
///         .time(34)
///         .field("region", "us-east-1"),
/// );
/// ```
#[derive(Debug, Default)]
pub struct Record {
    pub(crate) level: Level,
    pub(crate) message: Option<String>,
    pub(crate) code: Option<Value>,
    pub(crate) test: Option<bool>,
    pub(crate) time: Option<Value>,
    pub(crate) metric: Option<Value>,
    pub(crate) unit: Option<String>,
    pub(crate) op_id: Option<String>,
    pub(crate) data: Option<Value>,
    pub(crate) errors: Option<ErrorsValue>,
    pub(crate) extra: Map<String, Value>,
}

impl Record {
    /// Creates an empty record at the default `INFO` level.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the severity. Use [`Level::parse`] for free-form text input.
    #[inline]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the human-readable message. Empty text is omitted at emit time.
    #[inline]
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets an application code. Dropped if the value does not serialize.
    pub fn code<V: Serialize>(mut self, code: V) -> Self {
        self.code = serde_json::to_value(code).ok();
        self
    }

    /// Marks the record as produced by a test run.
    #[inline]
    pub fn test(mut self, test: bool) -> Self {
        self.test = Some(test);
        self
    }

    /// Sets an elapsed-time measurement in milliseconds.
    ///
    /// Emits as `metric` with `unit` forced to `"ms"`, taking precedence over
    /// any [`metric`](Record::metric)/[`unit`](Record::unit) pair. Non-numeric
    /// values are dropped.
    pub fn time<V: Serialize>(mut self, time: V) -> Self {
        self.time = serde_json::to_value(time).ok().filter(Value::is_number);
        self
    }

    /// Sets a free-form measurement, used only when no
    /// [`time`](Record::time) was supplied. Non-numeric values are dropped.
    pub fn metric<V: Serialize>(mut self, metric: V) -> Self {
        self.metric = serde_json::to_value(metric).ok().filter(Value::is_number);
        self
    }

    /// Sets the unit accompanying [`metric`](Record::metric).
    #[inline]
    pub fn unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the operation correlation id. See
    /// [`fresh_op_id`](crate::log::fresh_op_id) for generating one.
    #[inline]
    pub fn op_id<S: Into<String>>(mut self, op_id: S) -> Self {
        self.op_id = Some(op_id.into());
        self
    }

    /// Attaches an arbitrary structured payload, uninterpreted. Dropped if
    /// the value does not serialize.
    pub fn data<V: Serialize>(mut self, data: V) -> Self {
        self.data = serde_json::to_value(data).ok();
        self
    }

    /// Attaches failures to render into the single `errors` text field.
    #[inline]
    pub fn errors<V: Into<ErrorsValue>>(mut self, errors: V) -> Self {
        self.errors = Some(errors.into());
        self
    }

    /// Adds a passthrough field merged as-is into the record.
    ///
    /// Passthrough fields may shadow process-wide defaults by key but never
    /// displace a recognized field already populated in this call. Values
    /// that fail to serialize are dropped.
    pub fn field<K: Into<String>, V: Serialize>(mut self, key: K, value: V) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.extra.insert(key.into(), value);
        }
        self
    }
}
