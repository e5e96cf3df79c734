//! Keyboard state read by the view controls

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
    }
}

/// Keys the demo reacts to
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// Key state for one frame
///
/// `held` keys repeat every frame they are down (panning); `pressed` keys
/// are the key-down events of this frame only (zoom, scanline, quit).
#[derive(Debug,Default,Clone,PartialEq)]
pub struct KeyState {
    held: Vec<Key>,
    pressed: Vec<Key>,
    pub modifiers: Modifiers,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_modifiers(modifiers: Modifiers) -> Self {
        Self { modifiers, ..Self::default() }
    }
    /// Key-down event; the key is also held until released
    pub fn press(&mut self, key: Key) {
        self.pressed.push(key);
        self.hold(key);
    }
    /// Key is down without a new key-down event
    pub fn hold(&mut self, key: Key) {
        if ! self.held.contains(&key) {
            self.held.push(key);
        }
    }
    pub fn release(&mut self, key: Key) {
        self.held.retain(|&k| k != key);
    }
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
    /// Key-down events of this frame, in order
    pub fn pressed(&self) -> &[Key] {
        &self.pressed
    }
    /// Forget this frame's key-down events; held keys stay down
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}
