/// Index of an animation within a model's animation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub(crate) usize);

impl AnimationId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Runtime activation cursor for one animation on one entity instance.
///
/// Active while it holds a start tick. Restarting is explicit
/// ([`start`](Self::start)); the selector uses
/// [`start_if_stopped`](Self::start_if_stopped) so a state re-selected on
/// consecutive ticks keeps its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    animation: AnimationId,
    start_tick: Option<u32>,
}

impl AnimationState {
    #[must_use]
    pub fn new(animation: AnimationId) -> Self {
        Self {
            animation,
            start_tick: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn animation(&self) -> AnimationId {
        self.animation
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_tick.is_some()
    }

    /// The tick at which the state was last (re)started, if active.
    #[inline]
    #[must_use]
    pub fn start_tick(&self) -> Option<u32> {
        self.start_tick
    }

    /// Starts or restarts the animation at `tick`.
    pub fn start(&mut self, tick: u32) {
        self.start_tick = Some(tick);
    }

    /// Starts the animation unless it is already running.
    /// Returns `true` if it was started by this call.
    pub fn start_if_stopped(&mut self, tick: u32) -> bool {
        if self.start_tick.is_some() {
            return false;
        }
        self.start_tick = Some(tick);
        true
    }

    /// Returns `true` if the state was active.
    pub fn stop(&mut self) -> bool {
        self.start_tick.take().is_some()
    }

    pub fn animate_when(&mut self, condition: bool, tick: u32) {
        if condition {
            self.start_if_stopped(tick);
        } else {
            self.stop();
        }
    }

    /// Ticks elapsed since the start, given the entity age including the
    /// partial tick. `None` while inactive.
    #[inline]
    #[must_use]
    pub fn elapsed_ticks(&self, age_in_ticks: f32) -> Option<f32> {
        self.start_tick.map(|start| age_in_ticks - start as f32)
    }
}

/// The animation states of one entity instance, one per model animation.
#[derive(Debug, Clone, Default)]
pub struct AnimationStates {
    states: Vec<AnimationState>,
}

impl AnimationStates {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            states: (0..count).map(|i| AnimationState::new(AnimationId(i))).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: AnimationId) -> Option<&AnimationState> {
        self.states.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut AnimationState> {
        self.states.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationState> {
        self.states.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &AnimationState> {
        self.states.iter().filter(|s| s.is_active())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
