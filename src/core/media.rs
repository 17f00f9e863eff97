//=========================================================================
// Media Stubs
//=========================================================================
//
// Sound and image handles plus the operations games use on them.
//
// No backend exists in a headless run, so every load yields the
// unavailable handle and every play/loop/sprite call is accepted and
// ignored. Handles are typed tokens rather than addresses: a sound handle
// cannot be passed where an image is expected.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::marker::PhantomData;

use log::debug;

//=== Resource Kinds ======================================================

/// Marker for sound resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {}

/// Marker for image (sprite) resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Image {}

//=== Handle ==============================================================

/// Opaque token for a loaded resource of kind `K`.
///
/// In this environment it is always [`Handle::unavailable`].
pub struct Handle<K> {
    _kind: PhantomData<K>,
}

impl<K> Handle<K> {
    /// The sentinel returned when a resource could not be loaded.
    pub const fn unavailable() -> Self {
        Self { _kind: PhantomData }
    }

    /// Returns whether the handle refers to a real resource.
    pub const fn is_available(&self) -> bool {
        false
    }
}

// Manual impls keep `K` free of trait bounds.
impl<K> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Handle<K> {}

impl<K> PartialEq for Handle<K> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K> Eq for Handle<K> {}

impl<K> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handle(unavailable)")
    }
}

impl<K> Default for Handle<K> {
    fn default() -> Self {
        Self::unavailable()
    }
}

//=== MediaStub ===========================================================

/// Headless stand-in for the audio and sprite backends.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaStub;

impl MediaStub {
    pub fn new() -> Self {
        Self
    }

    //--- Audio ------------------------------------------------------------

    pub fn load_sound(&self, path: &str) -> Handle<Sound> {
        debug!("load_sound({:?}): no audio backend", path);
        Handle::unavailable()
    }

    pub fn play_sound(&self, _sound: Handle<Sound>) {}

    pub fn loop_sound(&self, _sound: Handle<Sound>) {}

    //--- Sprites ----------------------------------------------------------

    pub fn load_image(&self, path: &str) -> Handle<Image> {
        debug!("load_image({:?}): no graphics backend", path);
        Handle::unavailable()
    }

    pub fn set_sprite_position(&self, _sprite: Handle<Image>, _x: f64, _y: f64) {}

    pub fn draw_sprite(&self, _sprite: Handle<Image>) {}
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_always_yield_unavailable() {
        let media = MediaStub::new();
        for path in ["", "jump.wav", "missing/dir/boom.ogg", "héllo wörld"] {
            assert!(!media.load_sound(path).is_available());
            assert!(!media.load_image(path).is_available());
        }
    }

    #[test]
    fn unavailable_handles_compare_equal() {
        let media = MediaStub::new();
        assert_eq!(media.load_sound("a.wav"), Handle::<Sound>::unavailable());
        assert_eq!(media.load_image("b.png"), Handle::<Image>::default());
    }

    #[test]
    fn operations_accept_unavailable_handles() {
        let media = MediaStub::new();
        let sound = media.load_sound("music.ogg");
        let sprite = media.load_image("player.png");

        media.play_sound(sound);
        media.loop_sound(sound);
        media.set_sprite_position(sprite, -10.0, 1e9);
        media.draw_sprite(sprite);
    }

    #[test]
    fn debug_output_is_opaque() {
        assert_eq!(format!("{:?}", Handle::<Sound>::unavailable()), "Handle(unavailable)");
    }
}
