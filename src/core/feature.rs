//! GeoJSON-Features der Punktquelle (Fahrradparkplätze).

use serde::{Deserialize, Deserializer, Serialize};

use super::{LngLat, NewPoint};

/// Punkt-Geometrie im GeoJSON-Format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lng, lat]`
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    /// Erstellt eine `Point`-Geometrie.
    pub fn point(lng_lat: LngLat) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [lng_lat.lng, lng_lat.lat],
        }
    }
}

/// Beschreibende Eigenschaften eines Parkplatz-Features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub point_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "groupID", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Unbekannte Zusatzfelder bleiben erhalten
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Einzelnes Feature der Punktquelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_kind")]
    pub kind: String,
    /// ID, unabhängig vom Quellformat (Zahl oder String) als String geführt
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub geometry: PointGeometry,
    #[serde(default)]
    pub properties: FeatureProperties,
}

fn feature_kind() -> String {
    "Feature".to_string()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(n)) => n.to_string(),
        Some(RawId::Text(s)) => s,
        None => String::new(),
    })
}

impl Feature {
    /// Erstellt ein Feature aus einem gerade gespeicherten Punkt.
    pub fn from_new_point(id: impl Into<String>, point: &NewPoint) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            kind: feature_kind(),
            id: id.into(),
            geometry: PointGeometry::point(LngLat::new(point.lng, point.lat)),
            properties: FeatureProperties {
                title: Some(point.title.clone()),
                point_type: non_empty(&point.point_type),
                category: non_empty(&point.category),
                group_id: non_empty(&point.group_id),
                extra: serde_json::Map::new(),
            },
        }
    }

    /// Position des Features.
    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.geometry.coordinates[0], self.geometry.coordinates[1])
    }

    /// Titel, falls vorhanden und nicht leer.
    pub fn title(&self) -> Option<&str> {
        self.properties
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    /// Anzeigetext: Titel oder ersatzweise `id: <id>`.
    pub fn label(&self) -> String {
        match self.title() {
            Some(title) => title.to_string(),
            None => format!("id: {}", self.id),
        }
    }
}

/// GeoJSON-FeatureCollection als Datenquelle des Punkt-Layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Leere Collection.
    pub fn empty() -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Parst eine Collection aus GeoJSON-Text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 7,
                "geometry": { "type": "Point", "coordinates": [24.94, 60.17] },
                "properties": { "title": "Kamppi", "category": "u-rack", "capacity": 12 }
            },
            {
                "type": "Feature",
                "id": "abc",
                "geometry": { "type": "Point", "coordinates": [24.95, 60.16] },
                "properties": { "groupID": "g1" }
            }
        ]
    }"#;

    #[test]
    fn parses_numeric_and_string_ids() {
        let fc = FeatureCollection::from_json(SAMPLE).expect("gültiges GeoJSON");

        assert_eq!(fc.features.len(), 2);
        assert_eq!(fc.features[0].id, "7");
        assert_eq!(fc.features[1].id, "abc");
        assert_eq!(fc.features[1].properties.group_id.as_deref(), Some("g1"));
    }

    #[test]
    fn unknown_properties_are_kept() {
        let fc = FeatureCollection::from_json(SAMPLE).expect("gültiges GeoJSON");

        assert_eq!(
            fc.features[0].properties.extra.get("capacity"),
            Some(&serde_json::json!(12))
        );
    }

    #[test]
    fn label_falls_back_to_id() {
        let fc = FeatureCollection::from_json(SAMPLE).expect("gültiges GeoJSON");

        assert_eq!(fc.features[0].label(), "Kamppi");
        assert_eq!(fc.features[1].label(), "id: abc");
    }

    #[test]
    fn empty_title_counts_as_missing() {
        let mut feature = FeatureCollection::from_json(SAMPLE)
            .expect("gültiges GeoJSON")
            .features
            .remove(0);
        feature.properties.title = Some(String::new());

        assert_eq!(feature.label(), "id: 7");
    }

    #[test]
    fn empty_collection_serializes_as_geojson() {
        let json = serde_json::to_value(FeatureCollection::empty()).expect("serialisierbar");

        assert_eq!(
            json,
            serde_json::json!({ "type": "FeatureCollection", "features": [] })
        );
    }
}
