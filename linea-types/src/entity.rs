use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric payload carried by an entity.
///
/// Loaders either attach a full time series (missing samples as `null`) or a
/// single aggregated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Scalar(f64),
    Series(Vec<Option<f64>>),
}

/// A single geospatial entity, without its hierarchy links.
///
/// The position is a projected (planar) coordinate pair. It may be absent, in
/// which case it can be derived from the entity's children after the forest
/// is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<Point<f64>>,
    #[serde(default)]
    pub data: Option<Payload>,
    /// Auxiliary loader attributes, carried through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: None,
            data: None,
            attributes: Map::new(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn with_series(mut self, series: Vec<Option<f64>>) -> Self {
        self.data = Some(Payload::Series(series));
        self
    }

    pub fn with_scalar(mut self, value: f64) -> Self {
        self.data = Some(Payload::Scalar(value));
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn x(&self) -> Option<f64> {
        self.position.map(|p| p.x())
    }

    pub fn y(&self) -> Option<f64> {
        self.position.map(|p| p.y())
    }
}

/// Nested, loader-facing form of an entity tree.
///
/// `children: None` means the entity is a leaf; `Some(vec![])` is a declared
/// but empty child list, which the orchestrator reports as a structural
/// warning.
///
/// # Examples
///
/// ```
/// use linea_types::entity::EntityNode;
///
/// let json = r#"{
///     "id": "us", "name": "United States",
///     "position": {"x": 0.0, "y": 0.0},
///     "children": [ {"id": "us-ca", "name": "California", "level": "state"} ]
/// }"#;
/// let node: EntityNode = serde_json::from_str(json).unwrap();
/// assert_eq!(node.children.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityNode {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub children: Option<Vec<EntityNode>>,
}

impl EntityNode {
    pub fn leaf(entity: Entity) -> Self {
        Self {
            entity,
            children: None,
        }
    }

    pub fn with_children(entity: Entity, children: Vec<EntityNode>) -> Self {
        Self {
            entity,
            children: Some(children),
        }
    }

    /// Number of entities in this subtree, the node included.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(EntityNode::count)
            .sum::<usize>()
    }
}
