//! Record flag bitsets.
//!
//! Bit values are the Win32 `KEYEVENTF_*` / `MOUSEEVENTF_*` constants. They are
//! handed to `SendInput` untouched, so they must not drift.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// `KEYBDINPUT::dwFlags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct KeyboardFlags: u32 {
        /// `KEYEVENTF_EXTENDEDKEY`
        const EXTENDED_KEY = 0x0001;
        /// `KEYEVENTF_KEYUP`
        const KEY_UP = 0x0002;
        /// `KEYEVENTF_UNICODE`
        const UNICODE = 0x0004;
        /// `KEYEVENTF_SCANCODE`
        const SCAN_CODE = 0x0008;
    }
}

bitflags! {
    /// `MOUSEINPUT::dwFlags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MouseFlags: u32 {
        /// `MOUSEEVENTF_MOVE`
        const MOVE = 0x0001;
        /// `MOUSEEVENTF_LEFTDOWN`
        const LEFT_DOWN = 0x0002;
        /// `MOUSEEVENTF_LEFTUP`
        const LEFT_UP = 0x0004;
        /// `MOUSEEVENTF_RIGHTDOWN`
        const RIGHT_DOWN = 0x0008;
        /// `MOUSEEVENTF_RIGHTUP`
        const RIGHT_UP = 0x0010;
        /// `MOUSEEVENTF_MIDDLEDOWN`
        const MIDDLE_DOWN = 0x0020;
        /// `MOUSEEVENTF_MIDDLEUP`
        const MIDDLE_UP = 0x0040;
        /// `MOUSEEVENTF_XDOWN`
        const X_DOWN = 0x0080;
        /// `MOUSEEVENTF_XUP`
        const X_UP = 0x0100;
        /// `MOUSEEVENTF_WHEEL`
        const VERTICAL_WHEEL = 0x0800;
        /// `MOUSEEVENTF_HWHEEL`
        const HORIZONTAL_WHEEL = 0x1000;
        /// `MOUSEEVENTF_VIRTUALDESK`
        const VIRTUAL_DESK = 0x4000;
        /// `MOUSEEVENTF_ABSOLUTE`
        const ABSOLUTE = 0x8000;
    }
}

impl MouseFlags {
    const TRANSITION_PAIRS: [(MouseFlags, MouseFlags); 4] = [
        (MouseFlags::LEFT_DOWN, MouseFlags::LEFT_UP),
        (MouseFlags::RIGHT_DOWN, MouseFlags::RIGHT_UP),
        (MouseFlags::MIDDLE_DOWN, MouseFlags::MIDDLE_UP),
        (MouseFlags::X_DOWN, MouseFlags::X_UP),
    ];

    /// `true` if a down flag and its matching up flag are both set.
    ///
    /// X-button transitions and wheel events also share `mouseData`, so any two of
    /// them in one record count as a conflict as well.
    pub fn has_conflicting_transitions(self) -> bool {
        let paired = Self::TRANSITION_PAIRS
            .iter()
            .any(|(down, up)| self.contains(*down | *up));

        let data_users = [
            self.intersects(MouseFlags::X_DOWN | MouseFlags::X_UP),
            self.contains(MouseFlags::VERTICAL_WHEEL),
            self.contains(MouseFlags::HORIZONTAL_WHEEL),
        ];
        let data_conflict = data_users.iter().filter(|used| **used).count() > 1;

        paired || data_conflict
    }
}
