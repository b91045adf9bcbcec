//! Remote-API: `addPoint`-Mutation und Hintergrund-Worker.

pub mod graphql;
pub mod worker;

use serde_json::Value;

use crate::core::NewPoint;

pub use graphql::GraphqlClient;
pub use worker::MutationWorker;

/// Schnittstelle zum Backend, das neue Punkte speichert.
pub trait PointApi: Send + Sync {
    /// Führt `addPoint` aus und liefert das Mutationsergebnis.
    fn add_point(&self, point: &NewPoint) -> anyhow::Result<Value>;
}

/// Eingereihte `addPoint`-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPointRequest {
    pub request_id: u64,
    pub point: NewPoint,
}

/// Ergebnis einer `addPoint`-Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub enum AddPointOutcome {
    /// Backend hat geantwortet (`data.addPoint`, beliebiges JSON)
    Saved { result: Value },
    /// Transport-, HTTP- oder GraphQL-Fehler
    Failed { message: String },
}

/// Wahrheitswert eines JSON-Ergebnisses nach JavaScript-Regeln.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
