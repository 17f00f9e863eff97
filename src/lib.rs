//=========================================================================
// Headless Runtime — Library Root
//
// This crate runs a game's create/step/draw hooks with no graphics,
// audio or input backend, so game logic can be exercised in tests.
//
// Responsibilities:
// - Expose the step-bounded driver (`DriverBuilder`, `Driver`)
// - Expose the `Runtime` handle and stubs that hooks call into
// - Map run outcomes to process exit statuses
//
// Typical usage:
// ```no_run
// use headless_runtime::prelude::*;
//
// fn main() -> std::process::ExitCode {
//     let game = Hooks::new().on_step(|rt| rt.end_game());
//     DriverBuilder::new().build().run_to_exit(game)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the hook contract and everything hooks may call.
// `logging` sets up `env_logger` for binaries built on this crate.
//
pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the driver loop and exit reporting.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{report, Driver, DriverBuilder, RunReport, EXIT_FAILURE, EXIT_SUCCESS, MAX_STEPS};
pub use error::{DriverError, DriverResult};
