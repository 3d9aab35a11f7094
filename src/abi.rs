//! C layout of the `SendInput` record array.
//!
//! These `#[repr(C)]` types mirror Win32 `INPUT` / `KEYBDINPUT` / `MOUSEINPUT`
//! field for field, so the layout contract can be checked (and records dumped
//! byte-exact) on any host. The Windows backend builds `windows-sys` structs
//! directly; this module is the portable reference for what those must contain.
//!
//! ## Layout
//! ```text
//! INPUT       type: u32 | (pad to pointer alignment) | union { mi, ki }
//! KEYBDINPUT  wVk: u16, wScan: u16, dwFlags: u32, time: u32, dwExtraInfo: usize
//! MOUSEINPUT  dx: i32, dy: i32, mouseData: i32, dwFlags: u32, time: u32, dwExtraInfo: usize
//! ```
//! `time` and `dwExtraInfo` are always written as zero.

use crate::flags::{KeyboardFlags, MouseFlags};
use crate::keycode::VirtualKey;
use crate::record::{InputRecord, KeyboardInput, MouseInput};
use std::fmt;

/// `INPUT_MOUSE`
pub const INPUT_MOUSE: u32 = 0;
/// `INPUT_KEYBOARD`
pub const INPUT_KEYBOARD: u32 = 1;
/// `INPUT_HARDWARE` (never produced by this crate)
pub const INPUT_HARDWARE: u32 = 2;

/// One wheel notch, in `mouseData` units.
pub const WHEEL_DELTA: i32 = 120;
/// `mouseData` id of the first extension button.
pub const XBUTTON1: i32 = 0x0001;
/// `mouseData` id of the second extension button.
pub const XBUTTON2: i32 = 0x0002;
/// Upper bound of the normalized absolute coordinate space (both axes).
pub const ABSOLUTE_MAX: i32 = 0xFFFF;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawKeyboardInput {
    pub vk: u16,
    pub scan: u16,
    pub flags: u32,
    pub time: u32,
    pub extra_info: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawMouseInput {
    pub dx: i32,
    pub dy: i32,
    pub mouse_data: i32,
    pub flags: u32,
    pub time: u32,
    pub extra_info: usize,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawInputData {
    pub mi: RawMouseInput,
    pub ki: RawKeyboardInput,
}

/// `INPUT`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawInput {
    pub kind: u32,
    pub data: RawInputData,
}

impl RawInput {
    pub fn keyboard(ki: RawKeyboardInput) -> Self {
        // Start from the larger variant so no byte of the union is left uninitialized.
        let mut data = RawInputData {
            mi: RawMouseInput::default(),
        };
        data.ki = ki;
        Self {
            kind: INPUT_KEYBOARD,
            data,
        }
    }

    pub fn mouse(mi: RawMouseInput) -> Self {
        Self {
            kind: INPUT_MOUSE,
            data: RawInputData { mi },
        }
    }

    /// Keyboard payload, if `kind` says so.
    pub fn as_keyboard(&self) -> Option<RawKeyboardInput> {
        // SAFETY: `kind` selects the active union member; both are plain-old-data.
        (self.kind == INPUT_KEYBOARD).then(|| unsafe { self.data.ki })
    }

    /// Mouse payload, if `kind` says so.
    pub fn as_mouse(&self) -> Option<RawMouseInput> {
        // SAFETY: as above.
        (self.kind == INPUT_MOUSE).then(|| unsafe { self.data.mi })
    }

    /// Decode back into a typed record.
    ///
    /// Returns `None` for `INPUT_HARDWARE` or unknown discriminators. Flag bits
    /// outside the known set are dropped.
    pub fn to_record(&self) -> Option<InputRecord> {
        if let Some(ki) = self.as_keyboard() {
            return Some(InputRecord::Keyboard(KeyboardInput {
                key: VirtualKey(ki.vk),
                scan: ki.scan,
                flags: KeyboardFlags::from_bits_truncate(ki.flags),
            }));
        }
        self.as_mouse().map(|mi| {
            InputRecord::Mouse(MouseInput {
                dx: mi.dx,
                dy: mi.dy,
                mouse_data: mi.mouse_data,
                flags: MouseFlags::from_bits_truncate(mi.flags),
            })
        })
    }
}

impl From<&InputRecord> for RawInput {
    fn from(record: &InputRecord) -> Self {
        match record {
            InputRecord::Keyboard(k) => RawInput::keyboard(RawKeyboardInput {
                vk: k.key.code(),
                scan: k.scan,
                flags: k.flags.bits(),
                time: 0,
                extra_info: 0,
            }),
            InputRecord::Mouse(m) => RawInput::mouse(RawMouseInput {
                dx: m.dx,
                dy: m.dy,
                mouse_data: m.mouse_data,
                flags: m.flags.bits(),
                time: 0,
                extra_info: 0,
            }),
        }
    }
}

impl fmt::Debug for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RawInput");
        s.field("kind", &self.kind);
        if let Some(ki) = self.as_keyboard() {
            s.field("ki", &ki);
        } else if let Some(mi) = self.as_mouse() {
            s.field("mi", &mi);
        }
        s.finish()
    }
}

/// Convert a record slice into the contiguous array `SendInput` reads.
pub fn encode(records: &[InputRecord]) -> Vec<RawInput> {
    records.iter().map(RawInput::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::InputBuilder;
    use crate::record::MouseButton;
    use std::mem::{offset_of, size_of};

    #[test]
    fn payload_field_order() {
        assert_eq!(offset_of!(RawKeyboardInput, vk), 0);
        assert_eq!(offset_of!(RawKeyboardInput, scan), 2);
        assert_eq!(offset_of!(RawKeyboardInput, flags), 4);
        assert_eq!(offset_of!(RawKeyboardInput, time), 8);

        assert_eq!(offset_of!(RawMouseInput, dx), 0);
        assert_eq!(offset_of!(RawMouseInput, dy), 4);
        assert_eq!(offset_of!(RawMouseInput, mouse_data), 8);
        assert_eq!(offset_of!(RawMouseInput, flags), 12);
        assert_eq!(offset_of!(RawMouseInput, time), 16);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn input_size_on_64_bit() {
        assert_eq!(offset_of!(RawKeyboardInput, extra_info), 16);
        assert_eq!(offset_of!(RawMouseInput, extra_info), 24);
        assert_eq!(offset_of!(RawInput, data), 8);
        assert_eq!(size_of::<RawInput>(), 40);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn input_size_on_32_bit() {
        assert_eq!(offset_of!(RawInput, data), 4);
        assert_eq!(size_of::<RawInput>(), 28);
    }

    #[test]
    fn encodes_discriminator_and_zeroes() {
        let raw = encode(
            &InputBuilder::new()
                .key_up(VirtualKey::RCONTROL)
                .vertical_scroll(-WHEEL_DELTA)
                .into_batch(),
        );

        let ki = raw[0].as_keyboard().unwrap();
        assert_eq!(raw[0].kind, INPUT_KEYBOARD);
        assert_eq!(ki.vk, 0xA3);
        assert_eq!(ki.flags, 0x0003);
        assert_eq!((ki.time, ki.extra_info), (0, 0));

        let mi = raw[1].as_mouse().unwrap();
        assert_eq!(raw[1].kind, INPUT_MOUSE);
        assert_eq!(mi.mouse_data, -120);
        assert_eq!(mi.mouse_data as u32, 0xFFFF_FF88);
        assert_eq!(mi.flags, 0x0800);
        assert!(raw[1].as_keyboard().is_none());
    }

    #[test]
    fn decode_restores_records() {
        let batch = InputBuilder::new()
            .text("hi")
            .button_click(MouseButton::Middle)
            .absolute_move_virtual_desktop(ABSOLUTE_MAX, 0)
            .into_batch();
        let decoded: Vec<InputRecord> = encode(&batch)
            .iter()
            .filter_map(RawInput::to_record)
            .collect();
        assert_eq!(decoded.as_slice(), batch.records());
    }

    #[test]
    fn hardware_kind_does_not_decode() {
        let mut raw = RawInput::mouse(RawMouseInput::default());
        raw.kind = INPUT_HARDWARE;
        assert!(raw.to_record().is_none());
    }
}
