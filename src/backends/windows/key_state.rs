#![cfg(target_os = "windows")]

//! Win32 key state reader.
//!
//! - `GetKeyState`: the calling thread's view, updated as it pulls messages from
//!   its queue. Also the source of lock-key toggle state.
//! - `GetAsyncKeyState`: the global state at the instant of the call, regardless
//!   of message processing.

use crate::key_state::{state_is_down, state_is_toggled, KeyStateReader};
use crate::keycode::VirtualKey;

use windows_sys::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, GetKeyState};

/// [`KeyStateReader`] over the Win32 key state APIs.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsKeyState;

impl WindowsKeyState {
    #[inline]
    fn queue_state(key: VirtualKey) -> i16 {
        // SAFETY: pure query, any key code is accepted.
        unsafe { GetKeyState(i32::from(key.code())) }
    }

    #[inline]
    fn async_state(key: VirtualKey) -> i16 {
        // SAFETY: pure query, any key code is accepted.
        unsafe { GetAsyncKeyState(i32::from(key.code())) }
    }
}

impl KeyStateReader for WindowsKeyState {
    fn is_key_down(&self, key: VirtualKey) -> bool {
        state_is_down(Self::queue_state(key))
    }

    fn is_hardware_key_down(&self, key: VirtualKey) -> bool {
        state_is_down(Self::async_state(key))
    }

    fn is_toggling_key_in_effect(&self, key: VirtualKey) -> bool {
        state_is_toggled(Self::queue_state(key))
    }
}
