use crate::animate::pace::{Pace, SETTLE_DELAY};
use crate::sketch::model::Drawing;
use crate::surface::{StrokeStyle, Surface};
use crate::transform::ViewTransform;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
/// Animation lifecycle status.
pub enum Status {
    /// No animation in flight.
    #[default]
    Idle,
    /// An animation is being ticked.
    Running,
    /// The animation finished (or short-circuited); the surface holds the
    /// final strokes and the UI may swap in a static render.
    Completed,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
/// Snapshot of the engine's progress accounting.
///
/// Owned exclusively by [`Animator`]; external collaborators read it and
/// mutate it only through `start` / `tick` / `cancel`.
pub struct AnimationState {
    /// Lifecycle status.
    pub status: Status,
    /// Index of the stroke currently being drawn.
    pub stroke_cursor: usize,
    /// Index of the last point reached within the current stroke.
    pub point_cursor: usize,
    /// Ticks consumed so far, counting skipped degenerate strokes.
    pub segments_drawn: u64,
    /// Drawable segments in the whole drawing.
    pub total_segments: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of [`Animator::start`].
pub enum StartOutcome {
    /// The animation was armed; drive it with [`Animator::tick`] or
    /// [`Animator::run_blocking`].
    Started,
    /// An animation is already running; the call was a no-op.
    AlreadyRunning,
    /// The drawing had no drawable segments or the surface was unavailable;
    /// the engine went straight to [`Status::Completed`].
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of one [`Animator::tick`].
pub enum Tick {
    /// One segment was drawn (or a degenerate stroke skipped). The driver
    /// should report progress and wait the pace delay before the next tick.
    Advanced {
        /// Progress percentage after this tick, 0–100.
        progress: u8,
    },
    /// All strokes are drawn; the driver should wait [`SETTLE_DELAY`] before
    /// the next tick flips the engine to completed.
    Settling,
    /// The engine transitioned to [`Status::Completed`] on this tick.
    Finished,
    /// The engine is not running; nothing happened.
    Idle,
}

/// Receiver for the engine's outward events.
pub trait AnimationObserver {
    /// Progress update after a tick, monotone from 0 to exactly 100.
    fn on_progress(&mut self, _percent: u8) {}

    /// The animation completed; the UI may swap from the animating surface
    /// to a static render. Invoked exactly once per run, including runs that
    /// short-circuit.
    fn on_complete(&mut self) {}
}

/// Observer that ignores every event.
pub struct NoObserver;

impl AnimationObserver for NoObserver {}

struct Run {
    drawing: Drawing,
    transform: ViewTransform,
}

/// Frame-paced, cancellable animation state machine.
///
/// Draws exactly one line segment per [`Animator::tick`], flushing after
/// every segment so partial strokes stay visible if interrupted. Segments
/// within a stroke are drawn strictly in index order and strokes strictly in
/// sequence order; only whole strokes with fewer than two points are ever
/// skipped, and each skip still consumes a tick so degenerate data cannot
/// stall forward progress.
///
/// Single-threaded and cooperative: the caller (a scheduler, an event loop,
/// or [`Animator::run_blocking`]) decides when ticks happen, and the
/// `Running` status is the sole mutual-exclusion mechanism. [`Animator::cancel`]
/// is synchronous, so after it returns no tick of the cancelled run can
/// touch the surface again.
pub struct Animator {
    state: AnimationState,
    run: Option<Run>,
    pace: Pace,
    settling: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    /// An idle animator at [`Pace::Normal`].
    pub fn new() -> Self {
        Self {
            state: AnimationState::default(),
            run: None,
            pace: Pace::default(),
            settling: false,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current pacing preset.
    pub fn pace(&self) -> Pace {
        self.pace
    }

    /// Change the pacing preset. Ignored while running, matching the speed
    /// control being locked during playback.
    pub fn set_pace(&mut self, pace: Pace) {
        if self.state.status != Status::Running {
            self.pace = pace;
        }
    }

    /// Progress percentage: `floor(min(100, segments_drawn / total × 100))`.
    ///
    /// Monotonically non-decreasing across ticks and exactly 100 before the
    /// transition to [`Status::Completed`].
    pub fn progress(&self) -> u8 {
        if self.state.total_segments == 0 {
            return match self.state.status {
                Status::Completed => 100,
                _ => 0,
            };
        }
        (self.state.segments_drawn * 100 / self.state.total_segments).min(100) as u8
    }

    /// Arm a new animation over `drawing` using `transform`.
    ///
    /// At most one animation runs per surface: while `Running`, this is a
    /// no-op. Otherwise the surface is cleared, the stroke style derived
    /// from the transform is applied, and cursors reset. Drawings without a
    /// single drawable segment, or an unavailable surface, short-circuit to
    /// [`Status::Completed`] so the caller always reaches a consistent,
    /// displayable end state instead of hanging.
    ///
    /// The transform is taken fresh on every start; recompute it with
    /// [`ViewTransform::fit`] after any surface resize.
    pub fn start(
        &mut self,
        drawing: Drawing,
        transform: ViewTransform,
        surface: &mut dyn Surface,
    ) -> StartOutcome {
        if self.state.status == Status::Running {
            return StartOutcome::AlreadyRunning;
        }

        self.settling = false;
        let total_segments = drawing.segment_count();

        if total_segments == 0 || !surface.is_available() {
            self.run = None;
            self.state = AnimationState {
                status: Status::Completed,
                total_segments,
                ..AnimationState::default()
            };
            return StartOutcome::Completed;
        }

        surface.clear();
        surface.set_style(&StrokeStyle::with_width(transform.line_width()));

        self.state = AnimationState {
            status: Status::Running,
            total_segments,
            ..AnimationState::default()
        };
        self.run = Some(Run { drawing, transform });
        StartOutcome::Started
    }

    /// Advance the animation by exactly one unit of work.
    ///
    /// The single entry point for schedulers: call it once per pacing
    /// interval. Not running means [`Tick::Idle`] and an untouched surface,
    /// which is what makes a cancelled run inert even if a stale driver
    /// still fires.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Tick {
        if self.state.status != Status::Running {
            return Tick::Idle;
        }
        if self.settling {
            self.settling = false;
            self.state.status = Status::Completed;
            return Tick::Finished;
        }

        let Some(run) = self.run.as_ref() else {
            return Tick::Idle;
        };

        if self.state.stroke_cursor >= run.drawing.strokes.len() {
            self.settling = true;
            return Tick::Settling;
        }

        let stroke = &run.drawing.strokes[self.state.stroke_cursor];
        if !stroke.is_drawable() {
            // Degenerate strokes never get a path begun for them, but the
            // tick still counts so progress cannot stall.
            self.state.stroke_cursor += 1;
            self.state.point_cursor = 0;
            self.state.segments_drawn += 1;
            return Tick::Advanced {
                progress: self.progress(),
            };
        }

        if self.state.point_cursor == 0 {
            surface.begin_path();
            surface.move_to(run.transform.apply(stroke.points[0]));
        }

        let next = stroke.points[self.state.point_cursor + 1];
        surface.line_to(run.transform.apply(next));
        surface.stroke();

        self.state.point_cursor += 1;
        self.state.segments_drawn += 1;
        if self.state.point_cursor + 1 >= stroke.points.len() {
            self.state.stroke_cursor += 1;
            self.state.point_cursor = 0;
        }

        Tick::Advanced {
            progress: self.progress(),
        }
    }

    /// Abort the current run and reset to [`Status::Idle`].
    ///
    /// Synchronous: returns with the state already reset, no completion
    /// event is emitted, and any tick attempted afterwards is [`Tick::Idle`].
    /// Call before a fresh [`Animator::start`] when an external driver may
    /// still hold a scheduled tick, so two draw loops can never race on the
    /// same surface.
    pub fn cancel(&mut self) {
        self.settling = false;
        self.run = None;
        self.state = AnimationState::default();
    }

    /// Drive a started animation to completion on the current thread,
    /// sleeping the pace delay between segments and [`SETTLE_DELAY`] before
    /// the completed transition.
    pub fn run_blocking(&mut self, surface: &mut dyn Surface, observer: &mut dyn AnimationObserver) {
        loop {
            match self.tick(surface) {
                Tick::Advanced { progress } => {
                    observer.on_progress(progress);
                    std::thread::sleep(self.pace.delay());
                }
                Tick::Settling => std::thread::sleep(SETTLE_DELAY),
                Tick::Finished => {
                    observer.on_complete();
                    return;
                }
                Tick::Idle => return,
            }
        }
    }

    /// [`Animator::start`] followed by [`Animator::run_blocking`].
    ///
    /// Short-circuited runs still notify `on_complete`, so observers always
    /// see a terminal event.
    pub fn play(
        &mut self,
        drawing: Drawing,
        transform: ViewTransform,
        surface: &mut dyn Surface,
        observer: &mut dyn AnimationObserver,
    ) -> StartOutcome {
        let outcome = self.start(drawing, transform, surface);
        match outcome {
            StartOutcome::Started => self.run_blocking(surface, observer),
            StartOutcome::Completed => observer.on_complete(),
            StartOutcome::AlreadyRunning => {}
        }
        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/engine.rs"]
mod tests;
