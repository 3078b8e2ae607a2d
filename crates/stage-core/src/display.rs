use std::collections::HashMap;

/// A named render target in the hosting environment, the stand-in for a
/// canvas element looked up by id in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayElement {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl DisplayElement {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// The set of display elements the host exposes, plus the window viewport.
///
/// A [`Surface`](crate::surface::Surface) binds to one element by id at
/// acquisition time; a missing id is an acquisition error, not a deferred one.
#[derive(Debug, Clone, Default)]
pub struct DisplayRegistry {
    elements: HashMap<String, DisplayElement>,
    viewport: (u32, u32),
}

impl DisplayRegistry {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            elements: HashMap::new(),
            viewport: (viewport_width, viewport_height),
        }
    }

    pub fn register(&mut self, element: DisplayElement) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&DisplayElement> {
        self.elements.get(id)
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Simulates a window resize. Surfaces pick the new size up on their next
    /// `sync_size`.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn resize_element(&mut self, id: &str, width: u32, height: u32) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.width = width;
                element.height = height;
                true
            }
            None => false,
        }
    }
}
