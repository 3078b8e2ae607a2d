use crate::element::Renderable;
use crate::types::{NodeId, Transform};

/// A render-list entry: the renderable plus its placement state.
#[derive(Debug)]
pub struct StageNode {
    pub renderable: Box<dyn Renderable>,
    pub transform: Transform,
    pub visible: bool,
}

impl StageNode {
    pub fn new(renderable: Box<dyn Renderable>) -> Self {
        Self {
            renderable,
            transform: Transform::new(),
            visible: true,
        }
    }
}

/// The stage's render list.
///
/// Append-only: draw order follows insertion order, so later children paint
/// over earlier ones where they overlap.
#[derive(Debug, Default)]
pub struct Stage {
    nodes: Vec<StageNode>,
}

impl Stage {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends a renderable to the render list and returns its ID.
    pub fn add_child(&mut self, renderable: Box<dyn Renderable>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(StageNode::new(renderable));
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&StageNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut StageNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in draw order.
    pub fn nodes(&self) -> impl Iterator<Item = &StageNode> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut StageNode> {
        self.nodes.iter_mut()
    }
}
