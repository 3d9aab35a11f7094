//! Input records.
//!
//! An [`InputRecord`] is one unit of synthetic input: a single key transition or a
//! single mouse event, in the shape `SendInput` expects. The in-memory form is a
//! sum type; the overlapping C layout only exists at the boundary (see [`crate::abi`]).
//!
//! ## Field conventions
//! - Keyboard `key` is `0` for Unicode-driven records; `scan` then carries the UTF-16 code unit.
//! - Mouse `dx`/`dy` are pixel deltas unless [`MouseFlags::ABSOLUTE`] is set, in which
//!   case they are normalized `0..=65535` coordinates.
//! - Mouse `mouse_data` is the wheel amount (signed, verbatim) or the X-button id.
//! - Timestamp and extra-info are not stored; the OS fills the time and extra-info is
//!   always zero in this crate.

use crate::flags::{KeyboardFlags, MouseFlags};
use crate::keycode::VirtualKey;
use serde::{Deserialize, Serialize};

/// Keyboard payload (`KEYBDINPUT`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyboardInput {
    pub key: VirtualKey,
    pub scan: u16,
    pub flags: KeyboardFlags,
}

impl KeyboardInput {
    /// Key transition for a virtual key, extended flag set per [`VirtualKey::is_extended`].
    pub fn virtual_key(key: VirtualKey, up: bool) -> Self {
        let mut flags = KeyboardFlags::empty();
        if key.is_extended() {
            flags |= KeyboardFlags::EXTENDED_KEY;
        }
        if up {
            flags |= KeyboardFlags::KEY_UP;
        }
        Self {
            key,
            scan: 0,
            flags,
        }
    }

    /// Unicode transition for one UTF-16 code unit.
    ///
    /// Units whose high byte is `0xE0` are also tagged extended, matching how the OS
    /// treats an `E0`-prefixed scan code.
    pub fn unicode(unit: u16, up: bool) -> Self {
        let mut flags = KeyboardFlags::UNICODE;
        if (unit & 0xFF00) == 0xE000 {
            flags |= KeyboardFlags::EXTENDED_KEY;
        }
        if up {
            flags |= KeyboardFlags::KEY_UP;
        }
        Self {
            key: VirtualKey(0),
            scan: unit,
            flags,
        }
    }

    #[inline]
    pub fn is_key_up(&self) -> bool {
        self.flags.contains(KeyboardFlags::KEY_UP)
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        self.flags.contains(KeyboardFlags::EXTENDED_KEY)
    }

    #[inline]
    pub fn is_unicode(&self) -> bool {
        self.flags.contains(KeyboardFlags::UNICODE)
    }
}

/// Mouse payload (`MOUSEINPUT`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MouseInput {
    pub dx: i32,
    pub dy: i32,
    pub mouse_data: i32,
    pub flags: MouseFlags,
}

impl MouseInput {
    pub(crate) fn with_flags(flags: MouseFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    pub(crate) fn movement(dx: i32, dy: i32, flags: MouseFlags) -> Self {
        Self {
            dx,
            dy,
            mouse_data: 0,
            flags,
        }
    }

    pub(crate) fn with_data(mouse_data: i32, flags: MouseFlags) -> Self {
        Self {
            mouse_data,
            ..Self::with_flags(flags)
        }
    }
}

/// One synthetic input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputRecord {
    Mouse(MouseInput),
    Keyboard(KeyboardInput),
}

impl InputRecord {
    pub fn as_keyboard(&self) -> Option<&KeyboardInput> {
        match self {
            InputRecord::Keyboard(k) => Some(k),
            InputRecord::Mouse(_) => None,
        }
    }

    pub fn as_mouse(&self) -> Option<&MouseInput> {
        match self {
            InputRecord::Mouse(m) => Some(m),
            InputRecord::Keyboard(_) => None,
        }
    }
}

impl From<KeyboardInput> for InputRecord {
    fn from(k: KeyboardInput) -> Self {
        InputRecord::Keyboard(k)
    }
}

impl From<MouseInput> for InputRecord {
    fn from(m: MouseInput) -> Self {
        InputRecord::Mouse(m)
    }
}

/// The three standard mouse buttons.
///
/// Extension buttons are addressed by numeric id instead (see
/// [`InputBuilder::x_button_down`](crate::builder::InputBuilder::x_button_down)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    /// Press flag for this button.
    pub const fn down_flag(self) -> MouseFlags {
        match self {
            MouseButton::Left => MouseFlags::LEFT_DOWN,
            MouseButton::Middle => MouseFlags::MIDDLE_DOWN,
            MouseButton::Right => MouseFlags::RIGHT_DOWN,
        }
    }

    /// Release flag for this button.
    pub const fn up_flag(self) -> MouseFlags {
        match self {
            MouseButton::Left => MouseFlags::LEFT_UP,
            MouseButton::Middle => MouseFlags::MIDDLE_UP,
            MouseButton::Right => MouseFlags::RIGHT_UP,
        }
    }
}
