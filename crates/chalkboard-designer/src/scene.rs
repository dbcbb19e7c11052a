//! Scene store: the ordered list of shape records on the board.
//!
//! Order is z-order, first drawn at the bottom. Records are shared through
//! `Arc` so a snapshot costs one pointer per shape; every mutator returns a
//! new `Scene` and leaves `self` untouched.

use crate::model::{Shape, ShapeId};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scene {
    shapes: Vec<Arc<Shape>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> + '_ {
        self.shapes.iter().map(|s| s.as_ref())
    }

    /// Shapes top to bottom, the order hit tests use.
    pub fn iter_topmost(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.iter().rev()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last().map(|s| s.as_ref())
    }

    /// A new scene with `shape` on top.
    pub fn with_pushed(&self, shape: Shape) -> Scene {
        let mut shapes = self.shapes.clone();
        shapes.push(Arc::new(shape));
        Scene { shapes }
    }

    /// A new scene with the top record swapped for `shape`.
    pub fn with_last_replaced(&self, shape: Shape) -> Scene {
        let mut shapes = self.shapes.clone();
        match shapes.last_mut() {
            Some(last) => *last = Arc::new(shape),
            None => shapes.push(Arc::new(shape)),
        }
        Scene { shapes }
    }

    /// A new scene with the record carrying `shape.id` swapped in place.
    /// Returns `None` when no such record exists.
    pub fn with_replaced(&self, shape: Shape) -> Option<Scene> {
        let index = self.position(shape.id)?;
        let mut shapes = self.shapes.clone();
        shapes[index] = Arc::new(shape);
        Some(Scene { shapes })
    }

    /// A new scene without `id`. Returns `None` when no such record exists.
    pub fn without(&self, id: ShapeId) -> Option<Scene> {
        let index = self.position(id)?;
        let mut shapes = self.shapes.clone();
        shapes.remove(index);
        Some(Scene { shapes })
    }

    /// Whether `other` shares the record at `index` with this scene.
    pub fn shares_record(&self, other: &Scene, index: usize) -> bool {
        match (self.shapes.get(index), other.shapes.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Scene {
            shapes: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
