use std::fmt;
use std::iter::Rev;
use std::ops::RangeInclusive;
use std::slice;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier attached to a single sequencer invocation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selects which field/control pair a sequence drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Insert,
    Delete,
}

impl ActionKind {
    pub fn field(self) -> TargetElement {
        match self {
            ActionKind::Insert => TargetElement::InsertField,
            ActionKind::Delete => TargetElement::DeleteField,
        }
    }

    pub fn trigger(self) -> TargetElement {
        match self {
            ActionKind::Insert => TargetElement::InsertTrigger,
            ActionKind::Delete => TargetElement::DeleteTrigger,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Insert => "insert",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elements of the target environment the sequencer relies on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TargetElement {
    InsertField,
    DeleteField,
    InsertTrigger,
    DeleteTrigger,
}

impl fmt::Display for TargetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TargetElement::InsertField => "insert field",
            TargetElement::DeleteField => "delete field",
            TargetElement::InsertTrigger => "insert trigger",
            TargetElement::DeleteTrigger => "delete trigger",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl From<bool> for Order {
    fn from(ascending: bool) -> Self {
        if ascending {
            Order::Ascending
        } else {
            Order::Descending
        }
    }
}

/// Values of a request, kept lazy for generated ranges.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Values {
    /// `1..=n`, or `n..=1` for `Order::Descending`.
    Range { n: u32, order: Order },
    Literal(Vec<i64>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Range { n, .. } => *n as usize,
            Values::Literal(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> ValuesIter<'_> {
        match self {
            Values::Range { n, order } => {
                let range = 1..=i64::from(*n);
                match order {
                    Order::Ascending => ValuesIter::Ascending(range),
                    Order::Descending => ValuesIter::Descending(range.rev()),
                }
            }
            Values::Literal(values) => ValuesIter::Literal(values.iter()),
        }
    }
}

pub enum ValuesIter<'a> {
    Ascending(RangeInclusive<i64>),
    Descending(Rev<RangeInclusive<i64>>),
    Literal(slice::Iter<'a, i64>),
}

impl Iterator for ValuesIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self {
            ValuesIter::Ascending(range) => range.next(),
            ValuesIter::Descending(range) => range.next(),
            ValuesIter::Literal(values) => values.next().copied(),
        }
    }
}

/// Ordered values plus the action applied to each of them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub values: Values,
}

impl ActionRequest {
    pub fn new(kind: ActionKind, values: Vec<i64>) -> Self {
        Self {
            kind,
            values: Values::Literal(values),
        }
    }

    /// Insert actions over `1..=n` (or `n..=1`). `n == 0` yields an empty request.
    pub fn insert_range(n: u32, order: Order) -> Self {
        Self {
            kind: ActionKind::Insert,
            values: Values::Range { n, order },
        }
    }

    pub fn delete(values: Vec<i64>) -> Self {
        Self::new(ActionKind::Delete, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of a sequence that ran to completion.
#[derive(Clone, Debug)]
pub struct SequenceReport {
    pub run_id: RunId,
    pub kind: ActionKind,
    pub applied: usize,
    pub started_at: Instant,
    pub finished_at: Instant,
    pub latency_ms: u128,
}

impl SequenceReport {
    pub fn new(run_id: RunId, kind: ActionKind, started_at: Instant) -> Self {
        Self {
            run_id,
            kind,
            applied: 0,
            started_at,
            finished_at: started_at,
            latency_ms: 0,
        }
    }

    pub fn finish(mut self, finished_at: Instant) -> Self {
        self.finished_at = finished_at;
        self.latency_ms = finished_at
            .saturating_duration_since(self.started_at)
            .as_millis();
        self
    }
}
