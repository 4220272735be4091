use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use voice_detect::{Error, Result, app::LifecycleHook, config::Config};

/// Lifecycle hook that records every call into a shared journal
#[derive(Debug)]
pub struct RecordingHook {
    pub name: String,
    pub journal: Arc<Mutex<Vec<String>>>,
    pub fail_startup: bool,
    pub fail_shutdown: bool,
}

impl RecordingHook {
    pub fn new(name: &str, journal: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            journal,
            fail_startup: false,
            fail_shutdown: false,
        }
    }

    pub fn failing_startup(mut self) -> Self {
        self.fail_startup = true;
        self
    }

    pub fn failing_shutdown(mut self) -> Self {
        self.fail_shutdown = true;
        self
    }
}

#[async_trait]
impl LifecycleHook for RecordingHook {
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_startup(&self, _config: &Config) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("startup:{}", self.name));
        if self.fail_startup {
            return Err(Error::internal("startup refused"));
        }
        Ok(())
    }

    async fn on_shutdown(&self) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("shutdown:{}", self.name));
        if self.fail_shutdown {
            return Err(Error::internal("shutdown refused"));
        }
        Ok(())
    }
}
