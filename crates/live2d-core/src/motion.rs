use crate::settings::{ModelSettings, MotionRef};
use keyframe::{functions::EaseInOut, EasingFunction};
use rand::Rng;
use std::collections::HashMap;

/// How long a motion plays when nothing better is known.
///
/// Actual motion lengths live inside the motion files, which stay opaque to
/// this runtime (the Cubism core evaluates them).
pub const DEFAULT_MOTION_SECONDS: f32 = 4.0;

/// Priority of a motion request, mirroring the Cubism framework convention.
///
/// A playing motion is preempted only by a strictly higher priority; `Force`
/// additionally preempts other `Force` motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MotionPriority {
    /// Never plays.
    None,
    /// Background idling; yields to everything else.
    Idle,
    /// Regular interaction-triggered motions.
    Normal,
    /// Always plays, restarting even an active `Force` motion.
    Force,
}

/// The motion currently driving the model.
#[derive(Debug, Clone)]
pub struct ActiveMotion {
    pub group: String,
    pub index: usize,
    pub file: String,
    pub sound: Option<String>,
    pub priority: MotionPriority,
    fade_in: f32,
    fade_out: f32,
    duration: f32,
    elapsed: f32,
}

impl ActiveMotion {
    /// Blend weight in `[0, 1]` for the current point in the fade envelope.
    pub fn weight(&self) -> f32 {
        if self.elapsed >= self.duration {
            return 0.0;
        }
        let fade_in = if self.fade_in > 0.0 {
            (self.elapsed / self.fade_in).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let remaining = self.duration - self.elapsed;
        let fade_out = if self.fade_out > 0.0 {
            (remaining / self.fade_out).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let w = fade_in.min(fade_out);
        EaseInOut.y(w as f64) as f32
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Name-addressable motion triggering for one model instance.
///
/// Holds at most one active motion. Triggering an undefined or empty group is
/// a silent no-op: the vocabulary of valid names is owned by the descriptor,
/// not by callers.
#[derive(Debug, Clone)]
pub struct MotionManager {
    groups: HashMap<String, Vec<MotionRef>>,
    idle_group: Option<String>,
    current: Option<ActiveMotion>,
    default_duration: f32,
    autoplay_idle: bool,
    started: u64,
}

impl MotionManager {
    pub fn new(settings: &ModelSettings) -> Self {
        Self {
            groups: settings.motions().clone(),
            idle_group: settings.idle_group().map(str::to_string),
            current: None,
            default_duration: DEFAULT_MOTION_SECONDS,
            autoplay_idle: true,
            started: 0,
        }
    }

    /// Starts a motion from a named group.
    ///
    /// `index: None` picks a random entry, matching how taps feel varied on
    /// real models. Returns `false` (without touching playback state) when
    /// the group is undefined, the group is empty, the index is out of
    /// range, or the priority loses against the active motion.
    pub fn start_motion(
        &mut self,
        group: &str,
        index: Option<usize>,
        priority: MotionPriority,
    ) -> bool {
        let allowed = match &self.current {
            None => priority > MotionPriority::None,
            Some(active) => {
                priority == MotionPriority::Force || priority > active.priority
            }
        };
        if !allowed {
            return false;
        }

        let Some(entries) = self.groups.get(group) else {
            return false;
        };
        if entries.is_empty() {
            return false;
        }
        let index = match index {
            Some(i) if i < entries.len() => i,
            Some(_) => return false,
            None => rand::thread_rng().gen_range(0..entries.len()),
        };
        let entry = &entries[index];

        self.current = Some(ActiveMotion {
            group: group.to_string(),
            index,
            file: entry.file.clone(),
            sound: entry.sound.clone(),
            priority,
            fade_in: entry.fade_in,
            fade_out: entry.fade_out,
            duration: self.default_duration,
            elapsed: 0.0,
        });
        self.started += 1;
        true
    }

    /// Advances playback by `dt` seconds and returns the current blend weight.
    ///
    /// Expires finished motions and, when idle autoplay is on, falls back to
    /// a random motion from the descriptor's idle group.
    pub fn update(&mut self, dt: f32) -> f32 {
        if let Some(active) = &mut self.current {
            active.elapsed += dt;
            if active.finished() {
                self.current = None;
            }
        }

        if self.current.is_none() && self.autoplay_idle {
            if let Some(idle) = self.idle_group.clone() {
                self.start_motion(&idle, None, MotionPriority::Idle);
            }
        }

        self.current.as_ref().map_or(0.0, ActiveMotion::weight)
    }

    pub fn current(&self) -> Option<&ActiveMotion> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Total motions started, idle autoplay included.
    pub fn started_count(&self) -> u64 {
        self.started
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    /// Enables or disables automatic idle playback (on by default).
    pub fn set_autoplay_idle(&mut self, autoplay: bool) {
        self.autoplay_idle = autoplay;
    }

    /// Overrides the assumed motion length in seconds.
    pub fn set_default_duration(&mut self, seconds: f32) {
        self.default_duration = seconds.max(0.0);
    }
}
