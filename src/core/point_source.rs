//! Punktquelle des Marker-Layers mit Spatial-Index (KD-Tree) für Treffer-Abfragen.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::{Feature, FeatureCollection};

/// GeoJSON-Quelle mit KD-Tree über normalisierten Mercator-Koordinaten.
///
/// Der Baum enthält jede Position nur einmal; `positions[i]` hält die
/// Feature-Indizes, die auf Baum-Eintrag `i` liegen.
#[derive(Debug, Clone)]
pub struct PointSource {
    features: Vec<Feature>,
    positions: Vec<Vec<usize>>,
    tree: KdTree<f64, 2>,
}

impl PointSource {
    /// Erstellt eine Quelle aus einer FeatureCollection.
    pub fn new(data: FeatureCollection) -> Self {
        let mut source = Self {
            features: Vec::new(),
            positions: Vec::new(),
            tree: (&Vec::<[f64; 2]>::new()).into(),
        };
        source.set_data(data);
        source
    }

    /// Ersetzt alle Features und baut den Index neu.
    pub fn set_data(&mut self, data: FeatureCollection) {
        self.features = data.features;
        self.rebuild_index();
    }

    /// Fügt ein Feature hinzu (ersetzt ein bestehendes mit gleicher ID).
    pub fn upsert(&mut self, feature: Feature) {
        match self.features.iter_mut().find(|f| f.id == feature.id) {
            Some(existing) => *existing = feature,
            None => self.features.push(feature),
        }
        self.rebuild_index();
    }

    /// Alle Features in Einfügereihenfolge.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Anzahl der Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn die Quelle leer ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Aktueller Inhalt als FeatureCollection.
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection {
            features: self.features.clone(),
            ..FeatureCollection::empty()
        }
    }

    /// Features innerhalb eines Radius (Mercator-Einheiten), nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<&Feature> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut hits = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        hits.into_iter()
            .filter_map(|entry| self.positions.get(entry.item as usize))
            .flatten()
            .filter_map(|&index| self.features.get(index))
            .collect()
    }

    fn rebuild_index(&mut self) {
        let mut slots: HashMap<[u64; 2], usize> = HashMap::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        self.positions.clear();

        for (index, feature) in self.features.iter().enumerate() {
            let m = feature.lng_lat().to_mercator();
            let key = [m.x.to_bits(), m.y.to_bits()];
            match slots.get(&key) {
                Some(&slot) => self.positions[slot].push(index),
                None => {
                    slots.insert(key, entries.len());
                    entries.push([m.x, m.y]);
                    self.positions.push(vec![index]);
                }
            }
        }

        self.tree = (&entries).into();
    }
}

impl Default for PointSource {
    fn default() -> Self {
        Self::new(FeatureCollection::empty())
    }
}
