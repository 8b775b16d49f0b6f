use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::shared::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Problem,
    Skip,
}

/// Fired after a problem or a skip has been written.
///
/// Read-side consumers (dashboards, caches) subscribe to this instead of
/// polling a shared counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogged {
    pub user_id: UserId,
    pub kind: ActivityKind,
    pub local_date: NaiveDate,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent for ActivityLogged {
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }

    fn event_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
