//=========================================================================
// Core Runtime
//
// Everything a hooked game sees while the driver runs it.
//
// Responsibilities:
// - Define the hook contract (`Game`, `Hooks`)
// - Own per-run state handed to hooks (`Runtime`, completion flag)
// - Provide the headless stand-ins for printing, media and input
//
// Notes:
// Nothing here touches a window, a GPU or an audio device. Stubs accept
// every call and report "unavailable" where a value is expected.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod completion;
pub mod console;
pub mod game;
pub mod input;
pub mod media;
pub mod runtime;

//=== Public API ==========================================================

pub use completion::CompletionFlag;
pub use console::{ChannelSink, OutputSink, StdoutSink};
pub use game::{Game, Hooks};
pub use input::HeadlessInput;
pub use media::{Handle, Image, MediaStub, Sound};
pub use runtime::Runtime;
