//! Formularfelder des "Punkt hinzufügen"-Popups und deren Validierung.

use serde::Serialize;

use super::LngLat;

/// Fehlermeldung für leere Pflichtfelder.
pub const MSG_REQUIRED: &str = "this field is required";
/// Fehlermeldung für nicht-numerische Koordinaten.
pub const MSG_NUMBER: &str = "number required";
/// Fehlermeldung für Längengrade außerhalb des gültigen Bereichs.
pub const MSG_LNG_RANGE: &str = "number between -180 to 180 required";
/// Fehlermeldung für Breitengrade außerhalb des gültigen Bereichs.
pub const MSG_LAT_RANGE: &str = "number between -90 to 90 required";

/// Validierter Punkt, wie er an die `addPoint`-Mutation geht.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPoint {
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub point_type: String,
    #[serde(rename = "groupID")]
    pub group_id: String,
    pub lng: f64,
    pub lat: f64,
}

/// Eingabefelder des Formulars (Koordinaten als editierbarer Text).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointFormFields {
    pub title: String,
    pub point_type: String,
    pub category: String,
    pub group_id: String,
    pub lng: String,
    pub lat: String,
}

/// Inline-Fehler pro Feld; `None` = Feld gültig.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub lng: Option<&'static str>,
    pub lat: Option<&'static str>,
}

impl FieldErrors {
    /// Gibt `true` zurück, wenn kein Feld einen Fehler hat.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.lng.is_none() && self.lat.is_none()
    }
}

impl PointFormFields {
    /// Formular mit vorbelegten Koordinaten des Klickpunkts.
    pub fn seeded(lng_lat: LngLat) -> Self {
        Self {
            lng: lng_lat.lng.to_string(),
            lat: lng_lat.lat.to_string(),
            ..Default::default()
        }
    }

    /// Prüft Pflichtfelder und Koordinatenbereiche.
    pub fn validate(&self) -> Result<NewPoint, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some(MSG_REQUIRED);
        }

        let lng = match parse_coordinate(&self.lng, 180.0, MSG_LNG_RANGE) {
            Ok(v) => Some(v),
            Err(msg) => {
                errors.lng = Some(msg);
                None
            }
        };
        let lat = match parse_coordinate(&self.lat, 90.0, MSG_LAT_RANGE) {
            Ok(v) => Some(v),
            Err(msg) => {
                errors.lat = Some(msg);
                None
            }
        };

        match (lng, lat) {
            (Some(lng), Some(lat)) if errors.is_empty() => Ok(NewPoint {
                title: self.title.clone(),
                category: self.category.clone(),
                point_type: self.point_type.clone(),
                group_id: self.group_id.clone(),
                lng,
                lat,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_coordinate(text: &str, limit: f64, range_msg: &'static str) -> Result<f64, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MSG_REQUIRED);
    }
    let value: f64 = text.parse().map_err(|_| MSG_NUMBER)?;
    if !value.is_finite() {
        return Err(MSG_NUMBER);
    }
    if !(-limit..=limit).contains(&value) {
        return Err(range_msg);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> PointFormFields {
        PointFormFields {
            title: "Kamppi".to_string(),
            category: "u-rack".to_string(),
            ..PointFormFields::seeded(LngLat::new(24.93, 60.17))
        }
    }

    #[test]
    fn seeded_form_carries_click_coordinates() {
        let fields = PointFormFields::seeded(LngLat::new(24.5, 60.25));

        assert_eq!(fields.lng, "24.5");
        assert_eq!(fields.lat, "60.25");
        assert!(fields.title.is_empty());
    }

    #[test]
    fn valid_form_produces_new_point() {
        let point = valid_fields().validate().expect("Formular ist gültig");

        assert_eq!(point.title, "Kamppi");
        assert_eq!(point.category, "u-rack");
        assert_eq!(point.lng, 24.93);
        assert_eq!(point.lat, 60.17);
    }

    #[test]
    fn missing_title_is_rejected() {
        let fields = PointFormFields {
            title: "  ".to_string(),
            ..valid_fields()
        };

        let errors = fields.validate().unwrap_err();

        assert_eq!(errors.title, Some(MSG_REQUIRED));
        assert_eq!(errors.lng, None);
    }

    #[test]
    fn longitude_out_of_range_is_rejected() {
        let fields = PointFormFields {
            lng: "200".to_string(),
            ..valid_fields()
        };

        let errors = fields.validate().unwrap_err();

        assert_eq!(errors.lng, Some(MSG_LNG_RANGE));
        assert_eq!(errors.title, None);
    }

    #[test]
    fn latitude_bounds_are_inclusive() {
        let fields = PointFormFields {
            lng: "-180".to_string(),
            lat: "90".to_string(),
            ..valid_fields()
        };

        assert!(fields.validate().is_ok());

        let fields = PointFormFields {
            lat: "-90.0001".to_string(),
            ..valid_fields()
        };
        assert_eq!(fields.validate().unwrap_err().lat, Some(MSG_LAT_RANGE));
    }

    #[test]
    fn non_numeric_and_empty_coordinates() {
        let fields = PointFormFields {
            lng: "abc".to_string(),
            lat: String::new(),
            ..valid_fields()
        };

        let errors = fields.validate().unwrap_err();

        assert_eq!(errors.lng, Some(MSG_NUMBER));
        assert_eq!(errors.lat, Some(MSG_REQUIRED));
    }

    #[test]
    fn new_point_serializes_with_api_field_names() {
        let point = valid_fields().validate().expect("Formular ist gültig");
        let json = serde_json::to_value(&point).expect("serialisierbar");

        assert_eq!(json["type"], "");
        assert_eq!(json["groupID"], "");
        assert_eq!(json["title"], "Kamppi");
    }
}
