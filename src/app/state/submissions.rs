use indexmap::IndexMap;

use crate::api::AddPointRequest;
use crate::core::NewPoint;

/// Zustand der `addPoint`-Aufrufe zwischen Submit und Antwort.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// Noch nicht an den Worker übergebene Anfragen
    pub outbox: Vec<AddPointRequest>,
    /// Laufende Anfragen nach Request-ID
    pub in_flight: IndexMap<u64, NewPoint>,
    next_request_id: u64,
}

impl SubmissionState {
    /// Reiht einen Punkt ein und gibt die Request-ID zurück.
    pub fn enqueue(&mut self, point: NewPoint) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight.insert(request_id, point.clone());
        self.outbox.push(AddPointRequest { request_id, point });
        request_id
    }

    /// Übergibt alle wartenden Anfragen (leert die Outbox).
    pub fn take_outbox(&mut self) -> Vec<AddPointRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Beendet eine Anfrage und liefert den gesendeten Punkt.
    pub fn finish(&mut self, request_id: u64) -> Option<NewPoint> {
        self.in_flight.shift_remove(&request_id)
    }

    /// Gibt `true` zurück, solange Anfragen offen sind.
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }
}
