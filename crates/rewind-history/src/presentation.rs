//! Hooks that keep a presentation layer in sync with the history.
//!
//! None of these hooks are required. A headless game has no timer and no
//! buttons, and [`Presentation`] treats their absence as a no-op.
//!
//! Every load of an archived snapshot runs the same sequence: stop the
//! autonomous actor timer, restore, publish undo/redo availability, then
//! notify viewers. The timer is stopped first so a ghost tick cannot land
//! in the middle of a restore.

/// A timer that drives autonomous actors (ghosts) between player moves.
pub trait ActorTimer {
    /// Stop the timer. Restarting is up to whoever owns it.
    fn stop(&mut self);
}

/// Enable/disable state of undo and redo affordances (buttons, menu items).
pub trait UndoControls {
    /// Enable or disable the undo affordance.
    fn set_undo_enabled(&mut self, enabled: bool);

    /// Enable or disable the redo affordance.
    fn set_redo_enabled(&mut self, enabled: bool);
}

/// Anything that renders the live state and must refresh when it changes.
pub trait Viewer<S> {
    /// Called after every move or restore with the new live state.
    fn refresh(&mut self, state: &S);
}

impl<S, F> Viewer<S> for F
where
    F: FnMut(&S),
{
    fn refresh(&mut self, state: &S) {
        self(state);
    }
}

/// The set of presentation hooks attached to an [`Undoable`](crate::Undoable).
pub struct Presentation<S> {
    timer: Option<Box<dyn ActorTimer>>,
    controls: Option<Box<dyn UndoControls>>,
    viewers: Vec<Box<dyn Viewer<S>>>,
}

impl<S> Default for Presentation<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Presentation<S> {
    /// No timer, no controls, no viewers.
    pub const fn new() -> Self {
        Self {
            timer: None,
            controls: None,
            viewers: Vec::new(),
        }
    }

    /// Attach the autonomous actor timer, replacing any previous one.
    pub fn set_timer(&mut self, timer: Box<dyn ActorTimer>) {
        self.timer = Some(timer);
    }

    /// Attach the undo/redo controls, replacing any previous ones.
    pub fn set_controls(&mut self, controls: Box<dyn UndoControls>) {
        self.controls = Some(controls);
    }

    /// Register a viewer. Viewers are notified in registration order.
    pub fn add_viewer(&mut self, viewer: Box<dyn Viewer<S>>) {
        self.viewers.push(viewer);
    }

    /// Number of registered viewers.
    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    /// Stop the timer if there is one.
    pub fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }

    /// Push undo/redo availability to the controls if there are any.
    pub fn publish(&mut self, can_undo: bool, can_redo: bool) {
        if let Some(controls) = self.controls.as_mut() {
            controls.set_undo_enabled(can_undo);
            controls.set_redo_enabled(can_redo);
        }
    }

    /// Tell every viewer the live state changed.
    pub fn notify(&mut self, state: &S) {
        for viewer in &mut self.viewers {
            viewer.refresh(state);
        }
    }
}
