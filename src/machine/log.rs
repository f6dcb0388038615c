//! Transition log: the machine's record of applied switches.
//!
//! The log is the queryable counterpart of the observer surface. Every
//! applied switch appends one timestamped record; ticks that resolve
//! nothing leave the log untouched.

use crate::core::StateKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Record of a single applied switch.
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct SwitchRecord<K: StateKind> {
    /// The state that was replaced.
    pub from: K,
    /// The state that became active.
    pub to: K,
    /// Branch depth of the switch, root = 0.
    pub depth: usize,
    /// Primary tick number the switch was resolved in. Construction enters
    /// the initial root before tick 1 and is not recorded here.
    pub tick: u64,
    /// When the switch was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of applied switches.
///
/// Recording is functional: [`record`](TransitionLog::record) returns a new
/// log with the record appended, leaving the receiver untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use serde::Serialize;
/// use stratum::core::StateKind;
/// use stratum::machine::{SwitchRecord, TransitionLog};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
/// enum Phase {
///     Warmup,
///     Live,
/// }
///
/// impl StateKind for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Warmup => "Warmup",
///             Self::Live => "Live",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(SwitchRecord {
///     from: Phase::Warmup,
///     to: Phase::Live,
///     depth: 0,
///     tick: 3,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.records()[0].to, Phase::Live);
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct TransitionLog<K: StateKind> {
    records: Vec<SwitchRecord<K>>,
}

impl<K: StateKind> Default for TransitionLog<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateKind> TransitionLog<K> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    pub fn record(&self, record: SwitchRecord<K>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SwitchRecord<K>] {
        &self.records
    }

    /// The most recent record, if any switch was ever applied.
    pub fn last(&self) -> Option<&SwitchRecord<K>> {
        self.records.last()
    }

    /// Number of recorded switches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no switch has been applied yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
