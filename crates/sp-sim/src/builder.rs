//! Fluent builder for constructing a [`CategoryPlanner`].

use sp_core::{EngineConfig, SessionIdx};
use sp_limits::{LimitSource, LimitStore};
use sp_schedule::{Category, Rotation};

use crate::planner::{CategoryPlanner, SessionInput};
use crate::policy::LimitPolicy;
use crate::session::Replay;
use crate::{SimError, SimResult};

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Fluent builder for [`CategoryPlanner`].
///
/// # Required inputs
///
/// - [`Category`]: sessions and plan configuration
/// - [`LimitStore`]: limit records the session pools are resolved from
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                              |
/// |---------------------------|--------------------------------------|
/// | `.config(c)`              | `EngineConfig::default()`            |
/// | `.policies(v)`            | spill-over for every session         |
/// | `.policy(name, p)`        | —                                    |
/// | `.replay(session, r)`     | no replay pool                       |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(category, &limits)
///     .policy("alpha_main", LimitPolicy::SplitToday)
///     .build()?;
/// let today = planner.plan_day(date, record.as_ref(), None, &mut NoopObserver);
/// ```
pub struct PlannerBuilder<'a> {
    category:       Category,
    limits:         &'a LimitStore,
    config:         EngineConfig,
    policies:       Option<Vec<Option<LimitPolicy>>>,
    named_policies: Map<String, LimitPolicy>,
    replays:        Map<SessionIdx, Replay>,
}

impl<'a> PlannerBuilder<'a> {
    pub fn new(category: Category, limits: &'a LimitStore) -> Self {
        Self {
            category,
            limits,
            config:         EngineConfig::default(),
            policies:       None,
            named_policies: Map::default(),
            replays:        Map::default(),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Per-session policies in principal-session order (must be length
    /// `principal_count`).  `None` entries mean spill-over.
    pub fn policies(mut self, policies: Vec<Option<LimitPolicy>>) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Policy for the session named `name`; wins over `.policies`.
    pub fn policy(mut self, name: impl Into<String>, policy: LimitPolicy) -> Self {
        self.named_policies.insert(name.into(), policy);
        self
    }

    /// Start `session`'s days inside a replay pool.
    pub fn replay(mut self, session: SessionIdx, replay: Replay) -> Self {
        self.replays.insert(session, replay);
        self
    }

    /// Validate inputs, resolve pools and rotation, and return a ready
    /// [`CategoryPlanner`].
    pub fn build(mut self) -> SimResult<CategoryPlanner> {
        let principals: Vec<String> =
            self.category.principal_sessions().map(|s| s.name.clone()).collect();
        let count = principals.len();

        // ── Validate optional inputs ──────────────────────────────────────
        let mut policies = match self.policies.take() {
            Some(p) if p.len() != count => {
                return Err(SimError::SessionCountMismatch {
                    expected: count,
                    got:      p.len(),
                    what:     "limit policies",
                });
            }
            Some(p) => p,
            None => vec![None; count],
        };
        for (name, policy) in &self.named_policies {
            let i = principals.iter().position(|n| n == name).ok_or_else(|| {
                SimError::Config(format!("no principal session named {name:?}"))
            })?;
            policies[i] = Some(*policy);
        }
        if let Some(bad) = self.replays.keys().find(|s| s.index() >= count) {
            return Err(SimError::UnknownSession { index: bad.index(), count });
        }

        // ── Resolve pools ─────────────────────────────────────────────────
        let mut sessions = Vec::with_capacity(count);
        for (i, name) in principals.into_iter().enumerate() {
            let session = SessionIdx::try_from(i)
                .map_err(|_| SimError::Config(format!("too many sessions ({count})")))?;
            let resolved = self.limits.resolve(&name, &self.category.id);
            if resolved.source == LimitSource::Virtual {
                log::debug!("{name}: no limit record for category {}; pool is empty", self.category.id);
            }
            sessions.push(SessionInput {
                session,
                pool: resolved.limit.pool(),
                limit_source: resolved.source,
                default_step: 0,
                policy: policies[i],
                replay: self.replays.remove(&session),
                name,
            });
        }

        // ── Rotation and default steps ────────────────────────────────────
        let sizes: Vec<u64> = sessions.iter().map(|s| s.pool.size()).collect();
        let rotation = Rotation::for_plan(&self.category.plan, &sizes);
        for s in &mut sessions {
            s.default_step = rotation.step_for_session(s.pool.size());
        }
        log::debug!(
            "category {}: {} sessions, rotation {:.2} days",
            self.category.id,
            sessions.len(),
            rotation.days
        );

        Ok(CategoryPlanner {
            config: self.config,
            category: self.category,
            rotation,
            sessions,
        })
    }
}
