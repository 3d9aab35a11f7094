//! Key state queries.
//!
//! Two views of "is this key down" exist and they disagree on purpose:
//! - **queue state**: what the calling thread's message queue has seen so far
//!   (`GetKeyState` on Windows). Lags behind until messages are processed.
//! - **hardware state**: the global physical/async state at the moment of the call
//!   (`GetAsyncKeyState`).
//!
//! Implementations keep the two paths separate. Toggle state (Caps/Num/Scroll Lock)
//! comes from the queue view.

use crate::keycode::VirtualKey;
use std::collections::HashSet;

/// Point-in-time key state queries.
pub trait KeyStateReader {
    /// Key is down according to the thread's message-queue state.
    fn is_key_down(&self, key: VirtualKey) -> bool;

    /// Key is down according to the global hardware state.
    fn is_hardware_key_down(&self, key: VirtualKey) -> bool;

    /// Lock key toggle is on (low bit of the queue state).
    fn is_toggling_key_in_effect(&self, key: VirtualKey) -> bool;

    fn is_key_up(&self, key: VirtualKey) -> bool {
        !self.is_key_down(key)
    }

    fn is_hardware_key_up(&self, key: VirtualKey) -> bool {
        !self.is_hardware_key_down(key)
    }
}

impl<R: KeyStateReader + ?Sized> KeyStateReader for &R {
    fn is_key_down(&self, key: VirtualKey) -> bool {
        (**self).is_key_down(key)
    }

    fn is_hardware_key_down(&self, key: VirtualKey) -> bool {
        (**self).is_hardware_key_down(key)
    }

    fn is_toggling_key_in_effect(&self, key: VirtualKey) -> bool {
        (**self).is_toggling_key_in_effect(key)
    }
}

/// In-memory key state with independent queue and hardware views.
///
/// Useful as a stand-in on hosts without an OS reader, and for tests that need the
/// two views to diverge.
#[derive(Clone, Debug, Default)]
pub struct VirtualKeyState {
    queue_down: HashSet<VirtualKey>,
    hardware_down: HashSet<VirtualKey>,
    toggled: HashSet<VirtualKey>,
}

impl VirtualKeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` down/up in the message-queue view only.
    pub fn set_queue_down(&mut self, key: VirtualKey, down: bool) {
        set(&mut self.queue_down, key, down);
    }

    /// Mark `key` down/up in the hardware view only.
    pub fn set_hardware_down(&mut self, key: VirtualKey, down: bool) {
        set(&mut self.hardware_down, key, down);
    }

    /// Mark `key` down/up in both views.
    pub fn set_down(&mut self, key: VirtualKey, down: bool) {
        self.set_queue_down(key, down);
        self.set_hardware_down(key, down);
    }

    pub fn set_toggled(&mut self, key: VirtualKey, on: bool) {
        set(&mut self.toggled, key, on);
    }
}

fn set(keys: &mut HashSet<VirtualKey>, key: VirtualKey, on: bool) {
    if on {
        keys.insert(key);
    } else {
        keys.remove(&key);
    }
}

impl KeyStateReader for VirtualKeyState {
    fn is_key_down(&self, key: VirtualKey) -> bool {
        self.queue_down.contains(&key)
    }

    fn is_hardware_key_down(&self, key: VirtualKey) -> bool {
        self.hardware_down.contains(&key)
    }

    fn is_toggling_key_in_effect(&self, key: VirtualKey) -> bool {
        self.toggled.contains(&key)
    }
}

/// Decode a `GetKeyState` / `GetAsyncKeyState` return value: high bit set means down.
#[inline]
pub fn state_is_down(state: i16) -> bool {
    state < 0
}

/// Decode a `GetKeyState` return value: low bit set means the toggle is on.
#[inline]
pub fn state_is_toggled(state: i16) -> bool {
    (state & 0x0001) == 0x0001
}
