use crate::settings::ModelSettings;
use glam::Vec2;

/// Axis-aligned bounds of a hit region, in model-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[derive(Debug, Clone)]
struct HitRegion {
    name: String,
    bounds: Option<HitBounds>,
}

/// Point-in-region testing over the descriptor's named hit areas.
///
/// Real hit geometry is derived from the moc's drawables, which stay inside
/// the Cubism core; the embedder registers bounds for the regions it cares
/// about. Regions without registered bounds never match.
#[derive(Debug, Clone)]
pub struct HitTester {
    regions: Vec<HitRegion>,
}

impl HitTester {
    pub fn new(settings: &ModelSettings) -> Self {
        let regions = settings
            .hit_areas()
            .iter()
            .map(|area| HitRegion {
                name: area.name.clone(),
                bounds: None,
            })
            .collect();
        Self { regions }
    }

    /// Registers bounds for a named region. Returns `false` when the
    /// descriptor declares no such region.
    pub fn set_bounds(&mut self, name: &str, bounds: HitBounds) -> bool {
        match self.regions.iter_mut().find(|r| r.name == name) {
            Some(region) => {
                region.bounds = Some(bounds);
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    /// Names of every region containing the point, in declaration order.
    pub fn test(&self, x: f32, y: f32) -> Vec<String> {
        let p = Vec2::new(x, y);
        self.regions
            .iter()
            .filter(|r| r.bounds.is_some_and(|b| b.contains(p)))
            .map(|r| r.name.clone())
            .collect()
    }
}
