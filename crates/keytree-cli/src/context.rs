use crate::config::Settings;
use anyhow::Result;
use keytree_store::RedisStore;

/// Everything one invocation needs: resolved settings and the open store
/// connection. Built once at startup; the connection closes on drop.
pub struct ExecutionContext {
    pub settings: Settings,
    store: RedisStore,
}

impl ExecutionContext {
    /// Connect eagerly so a bad address fails before any output.
    pub fn open(settings: Settings) -> Result<Self> {
        let store = RedisStore::connect(&settings.store)?;
        tracing::info!(address = store.address(), "connected to store");
        Ok(Self { settings, store })
    }

    /// Split borrow for callers that need both at once.
    pub fn parts(&mut self) -> (&Settings, &mut RedisStore) {
        (&self.settings, &mut self.store)
    }
}
