use indexmap::IndexMap;

use crate::core::Feature;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Ausgewählte Features nach ID, in Auswahlreihenfolge
    pub selected_features: IndexMap<String, Feature>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_features: IndexMap::new(),
        }
    }

    /// Ersetzt die Auswahl.
    pub fn replace(&mut self, features: Vec<Feature>) {
        self.selected_features = features.into_iter().map(|f| (f.id.clone(), f)).collect();
    }

    /// Gibt `true` zurück, wenn nichts ausgewählt ist.
    pub fn is_empty(&self) -> bool {
        self.selected_features.is_empty()
    }

    /// Anzahl ausgewählter Features.
    pub fn len(&self) -> usize {
        self.selected_features.len()
    }

    /// Iteriert in Auswahlreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.selected_features.values()
    }
}
