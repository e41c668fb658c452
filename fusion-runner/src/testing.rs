//! Stub provider and log capture for unit tests

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fusion_client::{ClientError, Result};
use fusion_core::domain::status::{Artifact, StatusSnapshot};
use fusion_core::dto::job::CreateJobBody;
use tokio::time::Instant;

use crate::repository::JobRepository;

pub(crate) fn processing() -> StatusSnapshot {
    StatusSnapshot::with_status("processing")
}

pub(crate) fn success(video_url: &str, share_url: &str) -> StatusSnapshot {
    StatusSnapshot {
        status: "done".to_string(),
        artifacts: vec![
            Artifact::new("video", video_url),
            Artifact::new("share_url", share_url),
        ],
        ..Default::default()
    }
}

pub(crate) fn failed(code: &str, message: &str) -> StatusSnapshot {
    StatusSnapshot {
        status: "failed".to_string(),
        error_code: Some(code.to_string()),
        error_message: Some(message.to_string()),
        ..Default::default()
    }
}

/// Scripted provider: a queue of status responses, then a fallback
pub(crate) struct StubRepository {
    create_response: Mutex<Option<Result<String>>>,
    statuses: Mutex<VecDeque<Result<StatusSnapshot>>>,
    fallback: Option<StatusSnapshot>,
    create_calls: AtomicUsize,
    created_bodies: Mutex<Vec<CreateJobBody>>,
    call_times: Mutex<Vec<Instant>>,
}

impl StubRepository {
    pub(crate) fn with_statuses(statuses: Vec<Result<StatusSnapshot>>) -> Self {
        Self {
            create_response: Mutex::new(Some(Ok("J1".to_string()))),
            statuses: Mutex::new(statuses.into()),
            fallback: None,
            create_calls: AtomicUsize::new(0),
            created_bodies: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    /// Returns `snapshot` on every status read
    pub(crate) fn always(snapshot: StatusSnapshot) -> Self {
        Self {
            fallback: Some(snapshot),
            ..Self::with_statuses(Vec::new())
        }
    }

    /// Fails every status read
    pub(crate) fn failing() -> Self {
        Self::with_statuses(Vec::new())
    }

    pub(crate) fn with_create_response(self, response: Result<String>) -> Self {
        *self.create_response.lock().unwrap() = Some(response);
        self
    }

    pub(crate) fn transient_error() -> ClientError {
        ClientError::api_error(503, "unavailable")
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn created_bodies(&self) -> Vec<CreateJobBody> {
        self.created_bodies.lock().unwrap().clone()
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.call_times.lock().unwrap().len()
    }

    pub(crate) fn call_times(&self) -> Vec<Instant> {
        self.call_times.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRepository for StubRepository {
    async fn create_job(&self, body: &CreateJobBody) -> Result<String> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_bodies.lock().unwrap().push(body.clone());
        self.create_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ClientError::api_error(409, "already created")))
    }

    async fn fetch_status(&self, _job_id: &str) -> Result<StatusSnapshot> {
        self.call_times.lock().unwrap().push(Instant::now());
        if let Some(next) = self.statuses.lock().unwrap().pop_front() {
            return next;
        }
        match &self.fallback {
            Some(snapshot) => Ok(snapshot.clone()),
            None => Err(Self::transient_error()),
        }
    }
}

/// Log lines written while the returned guard is alive on this thread
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub(crate) fn count(&self, needle: &str) -> usize {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).matches(needle).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
