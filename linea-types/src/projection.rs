use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved key under which the order of the top-level entities is stored.
pub const ROOT_KEY: &str = "@@ROOT@@";

/// Open key-value bag for strategy-specific extras.
pub type Metadata = Map<String, Value>;

/// Neighborhood-preservation scores of one ordering.
///
/// Trustworthiness and continuity lie in `[0, 1]` (higher is better); both
/// stress values are non-negative (lower is better).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    #[serde(rename = "M1")]
    pub trustworthiness: f64,
    #[serde(rename = "M2")]
    pub continuity: f64,
    pub metric_stress: f64,
    pub nonmetric_stress: f64,
}

impl QualityScores {
    /// Scores of an ordering that cannot distort anything.
    pub const PERFECT: QualityScores = QualityScores {
        trustworthiness: 1.0,
        continuity: 1.0,
        metric_stress: 0.0,
        nonmetric_stress: 0.0,
    };
}

impl Default for QualityScores {
    fn default() -> Self {
        Self::PERFECT
    }
}

/// The ordered children of one parent under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtreeLevelOrder {
    pub order: Vec<String>,
    #[serde(flatten)]
    pub quality: QualityScores,
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl SubtreeLevelOrder {
    pub fn new(order: Vec<String>, quality: QualityScores) -> Self {
        Self {
            order,
            quality,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// All subtree orders of one hierarchy depth, keyed by parent identifier.
///
/// Depth 0 holds a single entry under [`ROOT_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerLevelOrders {
    orders: BTreeMap<String, SubtreeLevelOrder>,
}

impl PerLevelOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parent: impl Into<String>, order: SubtreeLevelOrder) {
        self.orders.insert(parent.into(), order);
    }

    pub fn get(&self, parent: &str) -> Option<&SubtreeLevelOrder> {
        self.orders.get(parent)
    }

    pub fn contains(&self, parent: &str) -> bool {
        self.orders.contains_key(parent)
    }

    pub fn root(&self) -> Option<&SubtreeLevelOrder> {
        self.orders.get(ROOT_KEY)
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.orders.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubtreeLevelOrder)> {
        self.orders.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// One complete ordering of an entity forest under one strategy.
///
/// Immutable once built: the flattened total order and the per-level orders
/// it was derived from are only exposed by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    key: String,
    name: Option<String>,
    description: Option<String>,
    total_order: Vec<String>,
    per_level: Vec<PerLevelOrders>,
}

impl Projection {
    pub fn new(
        key: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        total_order: Vec<String>,
        per_level: Vec<PerLevelOrders>,
    ) -> Self {
        Self {
            key: key.into(),
            name,
            description,
            total_order,
            per_level,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn total_order(&self) -> &[String] {
        &self.total_order
    }

    pub fn per_level(&self) -> &[PerLevelOrders] {
        &self.per_level
    }

    /// Number of hierarchy depths with at least one recorded order.
    pub fn depth(&self) -> usize {
        self.per_level.len()
    }

    /// Order recorded for `parent` at `depth`, if any.
    pub fn level_order(&self, depth: usize, parent: &str) -> Option<&SubtreeLevelOrder> {
        self.per_level.get(depth).and_then(|level| level.get(parent))
    }

    /// Position of `id` within the total order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.total_order.iter().position(|item| item == id)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
