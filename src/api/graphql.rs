//! GraphQL-Client für die `addPoint`-Mutation.

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};

use super::PointApi;
use crate::core::NewPoint;

/// Mutationsdokument mit den Formularfeldern als Variablen.
pub const ADD_POINT_MUTATION: &str = "mutation addPoint($title: String!, $category: String, $type: String, $groupID: String, $lng: Float!, $lat: Float!) {
  addPoint(title: $title, category: $category, type: $type, groupID: $groupID, lng: $lng, lat: $lat)
}";

/// Blockierender HTTP-Client gegen einen GraphQL-Endpunkt.
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl GraphqlClient {
    /// Erstellt einen Client für den gegebenen Endpunkt.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("bicycle-parking-map/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("HTTP-Client konnte nicht erstellt werden")?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Konfigurierter Endpunkt.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PointApi for GraphqlClient {
    fn add_point(&self, point: &NewPoint) -> Result<Value> {
        log::debug!("POST addPoint an {}: {}", self.endpoint, point.title);
        let response: Value = self
            .http
            .post(&self.endpoint)
            .json(&request_body(point))
            .send()
            .with_context(|| format!("Backend nicht erreichbar: {}", self.endpoint))?
            .error_for_status()
            .context("Backend meldet HTTP-Fehler")?
            .json()
            .context("Antwort ist kein gültiges JSON")?;
        parse_response(response)
    }
}

/// Request-Body `{ query, variables }` für `addPoint`.
pub fn request_body(point: &NewPoint) -> Value {
    json!({
        "query": ADD_POINT_MUTATION,
        "variables": point,
    })
}

/// Wertet eine GraphQL-Antwort aus: `errors` → Fehler, sonst `data.addPoint`.
pub fn parse_response(response: Value) -> Result<Value> {
    if let Some(errors) = response.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let messages: Vec<&str> = errors
                .iter()
                .map(|e| e.get("message").and_then(Value::as_str).unwrap_or("unbekannter Fehler"))
                .collect();
            bail!("GraphQL-Fehler: {}", messages.join("; "));
        }
    }

    Ok(response
        .pointer("/data/addPoint")
        .cloned()
        .unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> NewPoint {
        NewPoint {
            title: "Rautatientori".to_string(),
            category: "u-rack".to_string(),
            point_type: "line".to_string(),
            group_id: "g1".to_string(),
            lng: 24.94,
            lat: 60.17,
        }
    }

    #[test]
    fn body_carries_query_and_variables() {
        let body = request_body(&point());

        assert_eq!(body["query"], ADD_POINT_MUTATION);
        assert_eq!(
            body["variables"],
            json!({
                "title": "Rautatientori",
                "category": "u-rack",
                "type": "line",
                "groupID": "g1",
                "lng": 24.94,
                "lat": 60.17,
            })
        );
    }

    #[test]
    fn data_result_is_extracted() {
        let result = parse_response(json!({ "data": { "addPoint": { "id": 7 } } }))
            .expect("Antwort ohne Fehler");

        assert_eq!(result, json!({ "id": 7 }));
    }

    #[test]
    fn missing_data_is_null() {
        let result = parse_response(json!({ "data": null })).expect("Antwort ohne Fehler");

        assert_eq!(result, Value::Null);
    }

    #[test]
    fn errors_array_is_an_error() {
        let err = parse_response(json!({
            "data": null,
            "errors": [{ "message": "title taken" }, { "message": "denied" }],
        }))
        .unwrap_err();

        assert!(err.to_string().contains("title taken; denied"));
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let result = parse_response(json!({ "data": { "addPoint": true }, "errors": [] }))
            .expect("leeres errors-Array");

        assert_eq!(result, json!(true));
    }
}
