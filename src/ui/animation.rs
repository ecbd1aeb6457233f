//! Time-driven enter/leave transitions.
//!
//! Widgets never animate themselves. The wizard hands out declarative
//! [`AnimationSpec`]s (or withholds them), and a [`TransitionTracker`] turns
//! visibility flips into a [`Phase`] that the renderers sample each frame.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Horizontal slide used by the default panel animations, in cells.
pub const DEFAULT_SLIDE_CELLS: i16 = 4;

/// Default duration of a panel enter/leave animation.
pub const DEFAULT_PANEL_DURATION: Duration = Duration::from_millis(200);

/// Default duration of the modal container fade.
pub const DEFAULT_MODAL_FADE: Duration = Duration::from_millis(100);

/// What an animation does to the drawn content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Opacity only.
    Fade,
    /// Opacity plus a horizontal shift from `from` to `to` cells.
    FadeSlide { from: i16, to: i16 },
}

/// Stacking order while animating. Leaving content is drawn over
/// entering content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Layer {
    #[default]
    Base,
    Overlay,
}

/// Declarative animation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub motion: Motion,
    pub duration: Duration,
    pub layer: Layer,
}

impl AnimationSpec {
    /// Fade and slide in from the right.
    pub fn panel_enter(slide_cells: i16, duration: Duration) -> Self {
        Self {
            motion: Motion::FadeSlide {
                from: slide_cells,
                to: 0,
            },
            duration,
            layer: Layer::Base,
        }
    }

    /// Fade and slide out to the left, drawn above the incoming panel.
    pub fn panel_leave(slide_cells: i16, duration: Duration) -> Self {
        Self {
            motion: Motion::FadeSlide {
                from: 0,
                to: slide_cells.saturating_neg(),
            },
            duration,
            layer: Layer::Overlay,
        }
    }

    pub fn fade(duration: Duration) -> Self {
        Self {
            motion: Motion::Fade,
            duration,
            layer: Layer::Base,
        }
    }

    /// Pose at `progress` (0.0..=1.0) for the given direction.
    pub fn sample(&self, direction: Direction, progress: f32) -> Pose {
        let progress = progress.clamp(0.0, 1.0);
        let opacity = match direction {
            Direction::In => progress,
            Direction::Out => 1.0 - progress,
        };
        let offset_x = match self.motion {
            Motion::Fade => 0,
            Motion::FadeSlide { from, to } => {
                let span = f32::from(to) - f32::from(from);
                (f32::from(from) + span * progress).round() as i16
            }
        };
        Pose {
            offset_x,
            opacity,
            layer: self.layer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// Sampled animation values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset_x: i16,
    pub opacity: f32,
    pub layer: Layer,
}

impl Pose {
    /// Content is dimmed while less than half opaque.
    pub fn is_faint(&self) -> bool {
        self.opacity < 0.5
    }
}

/// Where a tracked element is in its visibility lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    Entering(Pose),
    Shown,
    Leaving(Pose),
}

impl Phase {
    /// Whether anything should be drawn at all.
    pub fn is_drawn(&self) -> bool {
        !matches!(self, Phase::Hidden)
    }

    pub fn pose(&self) -> Option<Pose> {
        match self {
            Phase::Entering(pose) | Phase::Leaving(pose) => Some(*pose),
            Phase::Hidden | Phase::Shown => None,
        }
    }

    pub fn layer(&self) -> Layer {
        self.pose().map(|pose| pose.layer).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
struct Track {
    visible: bool,
    running: Option<Running>,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    spec: AnimationSpec,
    direction: Direction,
    started: Instant,
}

impl Running {
    fn progress(&self, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }
}

/// Tracks enter/leave animations for a set of keyed elements.
///
/// The first observation of a visible element runs its enter animation
/// (mount animation); a missing spec makes the change instantaneous.
#[derive(Debug, Clone)]
pub struct TransitionTracker<K> {
    tracks: HashMap<K, Track>,
}

impl<K> Default for TransitionTracker<K> {
    fn default() -> Self {
        Self {
            tracks: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> TransitionTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current visibility of `key`, starting an animation when it
    /// differs from the previous observation.
    pub fn observe(
        &mut self,
        key: &K,
        visible: bool,
        enter: Option<AnimationSpec>,
        leave: Option<AnimationSpec>,
        now: Instant,
    ) {
        let start = |direction: Direction, spec: Option<AnimationSpec>| {
            spec.map(|spec| Running {
                spec,
                direction,
                started: now,
            })
        };

        match self.tracks.get_mut(key) {
            Some(track) if track.visible == visible => {}
            Some(track) => {
                track.visible = visible;
                track.running = if visible {
                    start(Direction::In, enter)
                } else {
                    start(Direction::Out, leave)
                };
            }
            None => {
                let running = if visible {
                    start(Direction::In, enter)
                } else {
                    None
                };
                self.tracks.insert(key.clone(), Track { visible, running });
            }
        }
    }

    pub fn phase(&self, key: &K, now: Instant) -> Phase {
        let Some(track) = self.tracks.get(key) else {
            return Phase::Hidden;
        };
        match track.running {
            Some(running) if running.progress(now) < 1.0 => {
                let pose = running.spec.sample(running.direction, running.progress(now));
                match running.direction {
                    Direction::In => Phase::Entering(pose),
                    Direction::Out => Phase::Leaving(pose),
                }
            }
            _ if track.visible => Phase::Shown,
            _ => Phase::Hidden,
        }
    }

    /// True while any tracked element is mid-animation.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tracks.values().any(|track| {
            track
                .running
                .is_some_and(|running| running.progress(now) < 1.0)
        })
    }

    /// Forget every element, so the next observation counts as a mount.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
