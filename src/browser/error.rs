use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Node.js browser server failed to spawn
    #[error("failed to spawn {script} (is Node.js installed?): {source}")]
    Spawn {
        script: String,
        #[source]
        source: std::io::Error,
    },

    /// Pipe to the browser server broke or returned nothing
    #[error("browser session I/O: {0}")]
    SessionIo(String),

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Browser server answered `ok: false`
    #[error("browser command '{command}' failed: {error}")]
    Protocol { command: String, error: String },

    #[error("timed out after {attempts} attempt(s) waiting for {what}")]
    Timeout { what: String, attempts: u32 },
}

impl DriverError {
    /// Whether a retry against the same session can succeed.
    ///
    /// Command failures and timeouts are page-level; a dead pipe or a
    /// failed spawn is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DriverError::Protocol { .. } | DriverError::Timeout { .. })
    }
}
