//=========================================================================
// Step-Bounded Driver
//
// Main entry point: runs a game's hooks without any real backend.
//
// Architecture:
// ```text
//     DriverBuilder  ──build()──>  Driver  ──run(game)──>  RunReport
//         │                          │                       or
//         ├─ with_max_steps()        ├─ create() once       DriverError
//         └─ with_output()           └─ step(), draw() until
//                                       end_game or ceiling
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io::{self, Write};
use std::process::ExitCode;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::{Game, OutputSink, Runtime, StdoutSink};
use crate::error::{DriverError, DriverResult};

//=== Constants ===========================================================

/// Default number of step/draw pairs allowed before a run fails.
pub const MAX_STEPS: u32 = 1000;

//=== DriverBuilder =======================================================

/// Builder for configuring and constructing a [`Driver`].
///
/// # Default Values
///
/// - **Max steps**: 1000
/// - **Output**: process stdout
///
/// # Examples
///
/// ```no_run
/// use headless_runtime::prelude::*;
///
/// let game = Hooks::new().on_step(|rt| rt.end_game());
/// DriverBuilder::new().build().run_to_exit(game);
/// ```
///
/// Capturing output:
/// ```rust
/// use headless_runtime::prelude::*;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let game = Hooks::new().on_step(|rt| {
///     rt.print_str("tick");
///     rt.end_game();
/// });
///
/// DriverBuilder::new()
///     .with_max_steps(10)
///     .with_output(ChannelSink::new(tx))
///     .build()
///     .run(game)
///     .unwrap();
///
/// assert_eq!(rx.try_recv().unwrap(), "tick");
/// ```
pub struct DriverBuilder {
    max_steps: u32,
    output: Box<dyn OutputSink>,
}

impl DriverBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_steps: MAX_STEPS,
            output: Box::new(StdoutSink),
        }
    }

    /// Sets the step ceiling.
    ///
    /// Default: 1000
    ///
    /// # Panics
    ///
    /// Panics if `max_steps == 0`.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        assert!(max_steps > 0, "Max steps must be positive");
        self.max_steps = max_steps;
        self
    }

    /// Sets where print calls from the game are written.
    ///
    /// Default: [`StdoutSink`]
    pub fn with_output<O>(mut self, output: O) -> Self
    where
        O: OutputSink + 'static,
    {
        self.output = Box::new(output);
        self
    }

    /// Builds the driver.
    pub fn build(self) -> Driver {
        info!("Building driver (max steps: {})", self.max_steps);

        Driver {
            max_steps: self.max_steps,
            output: self.output,
        }
    }
}

impl Default for DriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== RunReport ===========================================================

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of completed step/draw pairs.
    pub steps: u32,
}

//=== Driver ==============================================================

/// Runs a [`Game`] under a bounded step loop.
///
/// Create via [`DriverBuilder`].
pub struct Driver {
    max_steps: u32,
    output: Box<dyn OutputSink>,
}

impl Driver {
    /// Returns the configured step ceiling.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    //--- Execution --------------------------------------------------------

    /// Runs the game until it calls `end_game` or the ceiling is hit.
    ///
    /// # Lifecycle
    ///
    /// 1. `create()` once
    /// 2. If the game already ended, stop with 0 steps
    /// 3. `step()`, `draw()`, count the pair
    /// 4. Ended → `Ok`; ceiling reached → `Err`; otherwise back to 3
    ///
    /// # Errors
    ///
    /// [`DriverError::StepBudgetExceeded`] if `max_steps` pairs ran without
    /// completion.
    pub fn run<G: Game>(self, mut game: G) -> DriverResult<RunReport> {
        info!("Starting headless run (max steps: {})", self.max_steps);

        let mut rt = Runtime::new(self.output);

        game.create(&mut rt);
        debug!("create hook finished");

        let mut steps: u32 = 0;
        while !rt.is_ended() {
            game.step(&mut rt);
            game.draw(&mut rt);
            steps += 1;
            trace!("completed step {}", steps);

            if rt.is_ended() {
                break;
            }
            if steps >= self.max_steps {
                info!("Step ceiling of {} reached without end_game", self.max_steps);
                return Err(DriverError::StepBudgetExceeded {
                    max_steps: self.max_steps,
                });
            }
        }

        info!("Game ended after {} steps", steps);
        Ok(RunReport { steps })
    }

    /// Runs the game and maps the outcome to a process exit status.
    ///
    /// Failure writes the diagnostic line to stderr and yields status 1.
    pub fn run_to_exit<G: Game>(self, game: G) -> ExitCode {
        let result = self.run(game);
        ExitCode::from(report(&result, &mut io::stderr().lock()))
    }
}

//=== Exit Reporting ======================================================

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status of a run that hit the step ceiling.
pub const EXIT_FAILURE: u8 = 1;

/// Writes the diagnostic for a failed run into `err` and returns the
/// process exit status.
pub fn report<W: Write>(result: &DriverResult<RunReport>, err: &mut W) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            if let Err(io_err) = writeln!(err, "{}", e) {
                debug!("could not write diagnostic: {}", io_err);
            }
            EXIT_FAILURE
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
