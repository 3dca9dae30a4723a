use crate::config::FormConfig;
use crate::form::controller::FormController;
use cached::{Cached, TimedSizedCache};
use reqwest::Client;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

const CACHE_SIZE: usize = 1000;
/// Sessions expire after one hour without a visit.
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60;

/// The forms of every visitor, each one behind its own session id.
/// The number of kept forms is bounded; the least recently used one makes room.
pub struct FormSessions {
    config: Arc<FormConfig>,
    client: Client,
    controllers: Mutex<TimedSizedCache<String, FormController>>,
}

impl FormSessions {
    pub fn new(config: FormConfig, client: Client) -> Self {
        Self::with_cache(
            config,
            client,
            TimedSizedCache::with_size_and_lifespan_and_refresh(
                CACHE_SIZE,
                SESSION_LIFESPAN_SECONDS,
                true,
            ),
        )
    }

    fn with_cache(
        config: FormConfig,
        client: Client,
        controllers: TimedSizedCache<String, FormController>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            client,
            controllers: Mutex::new(controllers),
        }
    }

    pub fn find(&self, session_id: &str) -> Option<FormController> {
        self.controllers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cache_get(session_id)
            .cloned()
    }

    /// Create an empty form for a new visitor.
    /// Returns the id of the session along with its form.
    pub fn open(&self) -> (String, FormController) {
        let session_id = Uuid::new_v4().to_string();
        let controller = FormController::new(self.config.clone(), self.client.clone());
        self.controllers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cache_set(session_id.clone(), controller.clone());
        log::debug!("New form session opened.");

        (session_id, controller)
    }
}
