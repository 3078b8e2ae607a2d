use live2d_core::MotionManager;

/// A hit-event listener.
///
/// Receives the set of region names reported for the tap plus the motion
/// manager of the model that emitted the event, so handlers can trigger
/// motions on it directly.
pub type HitListener = Box<dyn FnMut(&[String], &mut MotionManager)>;

/// Listener registry for one model's hit events.
///
/// Listeners persist for the lifetime of the model; there is no
/// unsubscription.
#[derive(Default)]
pub struct HitListeners {
    listeners: Vec<HitListener>,
}

impl HitListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: HitListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers one hit event to every listener, in registration order.
    pub fn emit(&mut self, hit_areas: &[String], motions: &mut MotionManager) {
        for listener in self.listeners.iter_mut() {
            listener(hit_areas, motions);
        }
    }
}

impl std::fmt::Debug for HitListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
