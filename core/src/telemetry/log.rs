use log::info;

/// Scoped logger attributing grid events to their widget identifier.
#[derive(Debug, Clone)]
pub struct ValidationLog {
    scope: String,
}

impl ValidationLog {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }
}
