//! Hintergrund-Worker für `addPoint`: ein Thread pro Anfrage, Ergebnis per Channel.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::{AddPointOutcome, AddPointRequest, PointApi};
use crate::app::{AppIntent, AppState};

struct PendingMutation {
    request_id: u64,
    receiver: Receiver<AddPointOutcome>,
    join: Option<JoinHandle<()>>,
}

/// Führt Mutationen ohne Blockieren des Frame-Loops aus.
pub struct MutationWorker {
    api: Arc<dyn PointApi>,
    pending: Vec<PendingMutation>,
}

impl MutationWorker {
    /// Erstellt einen Worker über der gegebenen API.
    pub fn new(api: Arc<dyn PointApi>) -> Self {
        Self {
            api,
            pending: Vec::new(),
        }
    }

    /// Übergibt alle wartenden Anfragen aus dem State an Worker-Threads.
    pub fn submit_pending(&mut self, state: &mut AppState) {
        for request in state.submissions.take_outbox() {
            self.request(request);
        }
    }

    /// Startet eine einzelne Anfrage.
    pub fn request(&mut self, request: AddPointRequest) {
        let (tx, rx) = mpsc::channel();
        let api = Arc::clone(&self.api);
        let request_id = request.request_id;

        let join = thread::spawn(move || {
            let outcome = match api.add_point(&request.point) {
                Ok(result) => AddPointOutcome::Saved { result },
                Err(e) => AddPointOutcome::Failed {
                    message: format!("{:#}", e),
                },
            };
            let _ = tx.send(outcome);
        });

        log::debug!("addPoint #{} gestartet", request_id);
        self.pending.push(PendingMutation {
            request_id,
            receiver: rx,
            join: Some(join),
        });
    }

    /// Sammelt fertige Antworten als Intents ein.
    pub fn poll(&mut self) -> Vec<AppIntent> {
        let mut ready = Vec::new();
        let mut still = Vec::new();

        for mut pending in self.pending.drain(..) {
            let outcome = match pending.receiver.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => {
                    still.push(pending);
                    continue;
                }
                Err(TryRecvError::Disconnected) => AddPointOutcome::Failed {
                    message: "Worker-Thread abgebrochen".to_string(),
                },
            };
            if let Some(join) = pending.join.take() {
                let _ = join.join();
            }
            ready.push(AppIntent::AddPointCompleted {
                request_id: pending.request_id,
                outcome,
            });
        }

        self.pending = still;
        ready
    }

    /// Gibt `true` zurück, solange Anfragen laufen.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
