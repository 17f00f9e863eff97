//=========================================================================
// Game Hooks
//=========================================================================
//
// Contract between the driver and the game logic it runs.
//
// Flow:
//   create() ×1 → [ step() → draw() ] × N
//
// Hooks get `&mut Runtime`, through which they print, poke the media
// stubs, and request termination with `end_game`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::runtime::Runtime;

//=== Game Trait ==========================================================

/// Game logic driven by [`crate::Driver`].
///
/// Only `step()` is required. `create()` and `draw()` default to doing
/// nothing.
///
/// ```rust
/// # use headless_runtime::prelude::*;
/// struct OneShot;
///
/// impl Game for OneShot {
///     fn step(&mut self, rt: &mut Runtime) {
///         rt.end_game();
///     }
/// }
/// ```
pub trait Game {
    /// Called exactly once, before any stepping.
    fn create(&mut self, _rt: &mut Runtime) {}

    /// Called once per iteration, before `draw()`.
    fn step(&mut self, rt: &mut Runtime);

    /// Called once per iteration, after `step()`.
    fn draw(&mut self, _rt: &mut Runtime) {}
}

//=== Hooks ===============================================================

type Hook<'a> = Box<dyn FnMut(&mut Runtime) + 'a>;

/// [`Game`] assembled from closures.
///
/// Unset hooks do nothing.
///
/// ```rust
/// # use headless_runtime::prelude::*;
/// let mut steps = 0;
/// let game = Hooks::new().on_step(move |rt| {
///     steps += 1;
///     if steps == 3 {
///         rt.end_game();
///     }
/// });
/// let report = DriverBuilder::new().build().run(game).unwrap();
/// assert_eq!(report.steps, 3);
/// ```
#[derive(Default)]
pub struct Hooks<'a> {
    create: Option<Hook<'a>>,
    step: Option<Hook<'a>>,
    draw: Option<Hook<'a>>,
}

impl<'a> Hooks<'a> {
    pub fn new() -> Self {
        Self {
            create: None,
            step: None,
            draw: None,
        }
    }

    pub fn on_create<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Runtime) + 'a,
    {
        self.create = Some(Box::new(hook));
        self
    }

    pub fn on_step<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Runtime) + 'a,
    {
        self.step = Some(Box::new(hook));
        self
    }

    pub fn on_draw<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Runtime) + 'a,
    {
        self.draw = Some(Box::new(hook));
        self
    }
}

impl Game for Hooks<'_> {
    fn create(&mut self, rt: &mut Runtime) {
        if let Some(hook) = self.create.as_mut() {
            hook(rt);
        }
    }

    fn step(&mut self, rt: &mut Runtime) {
        if let Some(hook) = self.step.as_mut() {
            hook(rt);
        }
    }

    fn draw(&mut self, rt: &mut Runtime) {
        if let Some(hook) = self.draw.as_mut() {
            hook(rt);
        }
    }
}

impl<G: Game + ?Sized> Game for &mut G {
    fn create(&mut self, rt: &mut Runtime) {
        (**self).create(rt)
    }

    fn step(&mut self, rt: &mut Runtime) {
        (**self).step(rt)
    }

    fn draw(&mut self, rt: &mut Runtime) {
        (**self).draw(rt)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::ChannelSink;
    use crossbeam_channel::unbounded;
    use std::cell::RefCell;

    fn runtime() -> Runtime {
        let (tx, _rx) = unbounded();
        Runtime::new(Box::new(ChannelSink::new(tx)))
    }

    #[test]
    fn empty_hooks_do_nothing() {
        let mut rt = runtime();
        let mut hooks = Hooks::new();
        hooks.create(&mut rt);
        hooks.step(&mut rt);
        hooks.draw(&mut rt);
        assert!(!rt.is_ended());
    }

    #[test]
    fn hooks_dispatch_to_matching_closure() {
        let calls = RefCell::new(Vec::new());
        let mut rt = runtime();
        let mut hooks = Hooks::new()
            .on_create(|_| calls.borrow_mut().push("create"))
            .on_step(|_| calls.borrow_mut().push("step"))
            .on_draw(|_| calls.borrow_mut().push("draw"));

        hooks.draw(&mut rt);
        hooks.create(&mut rt);
        hooks.step(&mut rt);
        drop(hooks);

        assert_eq!(calls.into_inner(), vec!["draw", "create", "step"]);
    }

    #[test]
    fn trait_defaults_leave_runtime_untouched() {
        struct StepOnly;
        impl Game for StepOnly {
            fn step(&mut self, _rt: &mut Runtime) {}
        }

        let mut rt = runtime();
        let mut game = StepOnly;
        game.create(&mut rt);
        game.draw(&mut rt);
        assert!(!rt.is_ended());
    }
}
