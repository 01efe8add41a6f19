//! Scene model: a fixed-size map and the entities placed on it.
//!
//! JSON form:
//!
//! ```text
//! {
//!   "width": 12, "height": 8,
//!   "entities": [
//!     {"x": 2, "y": 3, "isPlayer": true, "facing": {"x": 1, "y": 0}},
//!     {"x": 7, "y": 5, "color": "#e11d48"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::MarkerProps;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene map must be at least 1x1, got {width}x{height}")]
    EmptyMap { width: u16, height: u16 },
}

/// One positioned marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub x: u16,
    pub y: u16,
    #[serde(flatten)]
    pub props: MarkerProps,
}

impl Entity {
    pub fn new(x: u16, y: u16, props: MarkerProps) -> Self {
        Self { x, y, props }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Scene {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Decode and validate a scene document.
    pub fn from_json(s: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(s)?;
        if scene.width == 0 || scene.height == 0 {
            return Err(SceneError::EmptyMap {
                width: scene.width,
                height: scene.height,
            });
        }
        Ok(scene)
    }

    pub fn in_bounds(&self, entity: &Entity) -> bool {
        entity.x < self.width && entity.y < self.height
    }

    /// Built-in scene showing every direction and style path.
    pub fn demo() -> Self {
        Scene::new(16, 10)
            .with_entity(Entity::new(2, 2, MarkerProps::player().with_facing(1, 0)))
            .with_entity(Entity::new(7, 1, MarkerProps::default().with_facing(0, -1)))
            .with_entity(Entity::new(11, 4, MarkerProps::default().with_facing(-1, 0)))
            .with_entity(Entity::new(
                4,
                6,
                MarkerProps::default().with_color("#e11d48").with_facing(0, 1),
            ))
            .with_entity(Entity::new(12, 7, MarkerProps::default().with_facing(1, 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacingVector;

    #[test]
    fn decodes_flattened_entity_props() {
        let scene = Scene::from_json(
            r##"{"width":4,"height":3,"entities":[
                {"x":1,"y":2,"isPlayer":true,"facing":{"x":-1,"y":0}},
                {"x":3,"y":0,"color":"#ff0000"}
            ]}"##,
        )
        .unwrap();

        assert_eq!(scene.entities.len(), 2);
        assert!(scene.entities[0].props.is_player);
        assert_eq!(scene.entities[0].props.facing, Some(FacingVector::new(-1, 0)));
        assert_eq!(scene.entities[1].props.color.as_deref(), Some("#ff0000"));
        assert_eq!(scene.entities[1].props.facing, None);
    }

    #[test]
    fn malformed_facing_does_not_fail_the_scene() {
        let scene = Scene::from_json(
            r#"{"width":2,"height":2,"entities":[{"x":0,"y":0,"facing":"north"}]}"#,
        )
        .unwrap();
        assert_eq!(scene.entities[0].props.facing, None);
    }

    #[test]
    fn malformed_identity_and_color_do_not_fail_the_scene() {
        let scene = Scene::from_json(
            r#"{"width":3,"height":3,"entities":[
                {"x":0,"y":0,"isPlayer":null},
                {"x":1,"y":1,"color":5,"isPlayer":true},
                {"x":2,"y":2,"isPlayer":"yes","color":["red"]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(scene.entities.len(), 3);
        assert!(!scene.entities[0].props.is_player);
        assert!(scene.entities[1].props.is_player);
        assert_eq!(scene.entities[1].props.color, None);
        assert!(!scene.entities[2].props.is_player);
        assert_eq!(scene.entities[2].props.color, None);
    }

    #[test]
    fn entities_default_to_empty() {
        let scene = Scene::from_json(r#"{"width":2,"height":2}"#).unwrap();
        assert!(scene.entities.is_empty());
    }

    #[test]
    fn rejects_empty_map() {
        let err = Scene::from_json(r#"{"width":0,"height":5}"#).unwrap_err();
        assert!(matches!(err, SceneError::EmptyMap { width: 0, height: 5 }));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Scene::from_json("{not json").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn bounds_check() {
        let scene = Scene::new(3, 3);
        assert!(scene.in_bounds(&Entity::new(2, 2, MarkerProps::default())));
        assert!(!scene.in_bounds(&Entity::new(3, 0, MarkerProps::default())));
    }

    #[test]
    fn demo_entities_are_in_bounds() {
        let scene = Scene::demo();
        assert!(!scene.entities.is_empty());
        assert!(scene.entities.iter().all(|e| scene.in_bounds(e)));
    }
}
