//! Categories and the sessions they hold.

use serde::{Deserialize, Serialize};
use sp_core::CategoryId;

use crate::PlanConfiguration;

/// Name markers that identify a mirror session even when the flag is unset.
const MIRROR_MARKERS: [&str; 2] = ["_M1_", "_M2_"];

/// A session (a.k.a. profile) inside a category.
///
/// The counters are observed figures used for reporting; they never feed
/// into allocation.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    #[serde(rename = "profileName")]
    pub name:          String,
    pub is_mirror:     bool,
    pub session_count: u64,
    pub success_count: u64,
    pub error_count:   u64,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn mirror(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_mirror: true, ..Self::default() }
    }

    /// `true` for sessions that take part in pool math.
    pub fn is_principal(&self) -> bool {
        !self.is_mirror && !MIRROR_MARKERS.iter().any(|m| self.name.contains(m))
    }

    /// `success / sessions`, or `None` before the first session ran.
    pub fn success_rate(&self) -> Option<f64> {
        (self.session_count > 0).then(|| self.success_count as f64 / self.session_count as f64)
    }
}

/// A named grouping of sessions sharing one plan configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id:       CategoryId,
    pub name:     String,
    #[serde(rename = "profiles")]
    pub sessions: Vec<Session>,
    #[serde(rename = "planConfiguration")]
    pub plan:     PlanConfiguration,
}

impl Category {
    /// Sessions that take part in pool math, in declaration order.
    ///
    /// The position in this iterator is the session's `SessionIdx`.
    pub fn principal_sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|s| s.is_principal())
    }

    pub fn principal_count(&self) -> usize {
        self.principal_sessions().count()
    }
}
