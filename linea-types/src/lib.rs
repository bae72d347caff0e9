//! # linea-types
//!
//! Core data types shared by the linea ordering engine.
//!
//! This crate provides the plain, serializable records that flow in and out
//! of the engine:
//!
//! - **Entity types**: `Entity`, `EntityNode`, `Payload`
//! - **Index types**: `SpatialPoint`
//! - **Result types**: `QualityScores`, `SubtreeLevelOrder`, `PerLevelOrders`, `Projection`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use linea_types::entity::Entity;
//!
//! let berlin = Entity::new("de-be", "Berlin").with_position(1_491_681.0, 6_893_310.0);
//! assert!(berlin.position.is_some());
//! ```

pub mod entity;
pub mod point;
pub mod projection;
