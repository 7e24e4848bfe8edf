// Stress Request - how many WorkerTasks a POST /stress asks for

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Body of POST /stress
///
/// `threads` is kept as raw JSON text: integer literals are read exactly, and
/// anything that does not convert to an integer falls back to the host CPU
/// count instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StressRequest {
    #[serde(default)]
    pub threads: Option<Box<RawValue>>,
}

impl StressRequest {
    /// Lenient body parsing: empty or malformed bodies become the default request
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn worker_count(&self, default: usize) -> WorkerCount {
        WorkerCount::resolve(self.threads.as_deref(), default)
    }
}

/// Resolved worker count, echoed verbatim in the response message.
///
/// Not clamped: zero, negative and arbitrarily large values are kept as sent.
/// Only `tasks_to_launch` floors or saturates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCount(Count);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Count {
    Exact(i128),
    /// Outside i128; decimal digits without sign or leading zeros
    Beyond { negative: bool, digits: String },
}

impl WorkerCount {
    pub fn new(value: i128) -> Self {
        Self(Count::Exact(value))
    }

    pub fn resolve(raw: Option<&RawValue>, default: usize) -> Self {
        raw.and_then(integer_from_json)
            .unwrap_or_else(|| Self::new(default as i128))
    }

    /// Parse integer text (`-12`, `+7`, `007`, any length)
    pub fn parse_integer_text(text: &str) -> Option<Self> {
        if let Ok(n) = text.parse::<i128>() {
            return Some(Self::new(n));
        }

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // i128 parse failed on pure digits, so they are too long to be zero
        Some(Self(Count::Beyond {
            negative,
            digits: unsigned.trim_start_matches('0').to_string(),
        }))
    }

    /// Truncate toward zero, keeping every digit of the float
    pub fn from_float(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let truncated = value.trunc();
        let bound = 2f64.powi(127);
        if truncated >= -bound && truncated < bound {
            return Some(Self::new(truncated as i128));
        }

        Some(Self(Count::Beyond {
            negative: truncated < 0.0,
            digits: format!("{:.0}", truncated.abs()),
        }))
    }

    /// The count when it fits in an i128
    pub fn value(&self) -> Option<i128> {
        match &self.0 {
            Count::Exact(n) => Some(*n),
            Count::Beyond { .. } => None,
        }
    }

    /// Number of tasks to actually spawn
    pub fn tasks_to_launch(&self) -> usize {
        match &self.0 {
            Count::Exact(n) if *n <= 0 => 0,
            Count::Exact(n) => usize::try_from(*n).unwrap_or(usize::MAX),
            Count::Beyond { negative: true, .. } => 0,
            Count::Beyond { negative: false, .. } => usize::MAX,
        }
    }
}

impl std::fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Count::Exact(n) => write!(f, "{}", n),
            Count::Beyond { negative, digits } => {
                write!(f, "{}{}", if *negative { "-" } else { "" }, digits)
            }
        }
    }
}

/// Integer conversion: int literals exact, floats truncated, integer strings parsed, bools as 0/1
fn integer_from_json(raw: &RawValue) -> Option<WorkerCount> {
    let text = raw.get().trim();
    if let Some(count) = WorkerCount::parse_integer_text(text) {
        return Some(count);
    }

    match serde_json::from_str::<Value>(text).ok()? {
        Value::Number(n) => n.as_f64().and_then(WorkerCount::from_float),
        Value::String(s) => WorkerCount::parse_integer_text(s.trim()),
        Value::Bool(b) => Some(WorkerCount::new(i128::from(b))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// What a launcher managed to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchReport {
    pub requested: usize,
    pub started: usize,
    pub failed: usize,
}

impl LaunchReport {
    /// Tasks were requested and none of them started
    pub fn is_total_failure(&self) -> bool {
        self.requested > 0 && self.started == 0
    }
}
