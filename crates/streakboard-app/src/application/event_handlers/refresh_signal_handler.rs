use async_trait::async_trait;
use log::debug;
use tokio::sync::watch;

use streakboard_domain::events::{ActivityLogged, EventHandler};
use streakboard_domain::shared::DomainError;

/// Monotonic "something changed" key for polling dashboards.
///
/// Bumped once per logged activity; clients re-fetch when it moves.
#[derive(Clone)]
pub struct RefreshSignal {
    sender: watch::Sender<u64>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    pub fn current(&self) -> u64 {
        *self.sender.borrow()
    }

    fn bump(&self) -> u64 {
        self.sender.send_modify(|key| *key = key.wrapping_add(1));
        self.current()
    }

    pub fn handler(&self) -> RefreshSignalHandler {
        RefreshSignalHandler {
            signal: self.clone(),
        }
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RefreshSignalHandler {
    signal: RefreshSignal,
}

#[async_trait]
impl EventHandler<ActivityLogged> for RefreshSignalHandler {
    async fn handle(&self, event: &ActivityLogged) -> Result<(), DomainError> {
        let key = self.signal.bump();
        debug!(
            "Refresh key bumped to {} by {:?} from user {}",
            key, event.kind, event.user_id
        );
        Ok(())
    }
}
