//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use headless_runtime::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Driver
pub use crate::engine::{Driver, DriverBuilder, RunReport};
pub use crate::error::DriverError;

// Hooks and the runtime they receive
pub use crate::core::{Game, Hooks, Runtime};

// Output and handles
pub use crate::core::{ChannelSink, Handle, Image, OutputSink, Sound, StdoutSink};
