//=========================================================================
// Runtime
//=========================================================================
//
// The handle every game hook receives.
//
// Contains everything a hook may touch during a run:
// - completion: the flag `end_game` sets and the driver polls
// - output: where print calls go
// - media / input: headless stubs for audio, sprites and keyboard
//
// A fresh `Runtime` is built for each driver run, so runs never share
// completion state.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::completion::CompletionFlag;
use super::console::{format_bool, format_float, format_int, OutputSink};
use super::input::HeadlessInput;
use super::media::{Handle, Image, MediaStub, Sound};

//=== Runtime =============================================================

/// Operations exposed to game hooks.
///
/// None of these fail. Unsupported operations silently do nothing or
/// return a fixed sentinel.
pub struct Runtime {
    completion: CompletionFlag,
    output: Box<dyn OutputSink>,
    media: MediaStub,
    input: HeadlessInput,
}

impl Runtime {
    /// Creates a runtime that prints into `output`.
    pub(crate) fn new(output: Box<dyn OutputSink>) -> Self {
        Self {
            completion: CompletionFlag::new(),
            output,
            media: MediaStub::new(),
            input: HeadlessInput::new(),
        }
    }

    //--- Completion -------------------------------------------------------

    /// Signals that the game is finished.
    ///
    /// The driver stops after the current step/draw pair. Calling this more
    /// than once has no further effect.
    pub fn end_game(&mut self) {
        if self.completion.signal() {
            debug!("end_game called");
        } else {
            trace!("end_game called again, already ended");
        }
    }

    /// Returns whether [`Runtime::end_game`] has been called.
    pub fn is_ended(&self) -> bool {
        self.completion.is_set()
    }

    //--- Printing ---------------------------------------------------------

    pub fn print_int(&mut self, value: i64) {
        self.output.write_line(&format_int(value));
    }

    pub fn print_bool(&mut self, value: bool) {
        self.output.write_line(&format_bool(value));
    }

    pub fn print_float(&mut self, value: f64) {
        self.output.write_line(&format_float(value));
    }

    pub fn print_str(&mut self, text: &str) {
        self.output.write_line(text);
    }

    //--- Audio ------------------------------------------------------------

    pub fn load_sound(&self, path: &str) -> Handle<Sound> {
        self.media.load_sound(path)
    }

    pub fn play_sound(&self, sound: Handle<Sound>) {
        self.media.play_sound(sound)
    }

    pub fn loop_sound(&self, sound: Handle<Sound>) {
        self.media.loop_sound(sound)
    }

    //--- Sprites ----------------------------------------------------------

    pub fn load_image(&self, path: &str) -> Handle<Image> {
        self.media.load_image(path)
    }

    pub fn set_sprite_position(&self, sprite: Handle<Image>, x: f64, y: f64) {
        self.media.set_sprite_position(sprite, x, y)
    }

    pub fn draw_sprite(&self, sprite: Handle<Image>) {
        self.media.draw_sprite(sprite)
    }

    //--- Input ------------------------------------------------------------

    /// Always `false`: no keyboard exists in a headless run.
    pub fn key_pressed(&self, code: i32) -> bool {
        self.input.key_pressed(code)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
