//! Shared test doubles.

use hangman_client::{LineChannel, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory channel that serves canned server lines and records client lines.
pub struct ScriptedChannel {
    responses: VecDeque<String>,
    sent: Arc<Mutex<Vec<String>>>,
    reads: Arc<Mutex<usize>>,
    fail_writes: bool,
}

#[allow(dead_code)]
impl ScriptedChannel {
    /// Serves `responses` in order, then reports end-of-stream.
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|line| line.to_string()).collect(),
            sent: Arc::default(),
            reads: Arc::default(),
            fail_writes: false,
        }
    }

    /// Makes every write fail as if the peer had reset the connection.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Handle to the lines the client has sent.
    pub fn sent(&self) -> Arc<Mutex<Vec<String>>> {
        self.sent.clone()
    }

    /// Handle to the number of reads the client has attempted.
    pub fn reads(&self) -> Arc<Mutex<usize>> {
        self.reads.clone()
    }
}

#[async_trait::async_trait]
impl LineChannel for ScriptedChannel {
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        if self.fail_writes {
            return Err(TransportError::new("connection reset by peer"));
        }
        self.sent.lock().unwrap().push(line.to_string());
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        *self.reads.lock().unwrap() += 1;
        Ok(self.responses.pop_front())
    }
}

/// Server greeting the client must skip.
#[allow(dead_code)]
pub const BANNER: [&str; 2] = ["Welcome to the hangman server", "Ready"];
