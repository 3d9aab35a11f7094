#![cfg(target_os = "windows")]

//! `SendInput` injection sink.
//!
//! Converts each [`InputRecord`] to a `windows-sys` `INPUT` and submits the whole
//! array in one `SendInput` call, which the OS injects serially without
//! interleaving other input.
//!
//! ## Failure modes
//! - `SendInput` returns `0` when the batch was blocked entirely (most often by
//!   UIPI: the foreground window belongs to a higher-integrity process). This maps
//!   to [`InjectError::Os`] with `GetLastError()`.
//! - A short non-zero count is returned as-is; [`submit`](crate::sink::submit)
//!   turns it into [`InjectError::Partial`].

use crate::error::InjectError;
use crate::record::InputRecord;
use crate::sink::InjectionSink;

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, MOUSEINPUT,
};

/// Injection through `user32!SendInput`.
#[derive(Default)]
pub struct SendInputSink {
    /// Reused conversion buffer.
    buf: Vec<INPUT>,
}

impl SendInputSink {
    pub fn new() -> Self {
        Self::default()
    }
}

// `INPUT` has no `Debug`; the buffer is scratch space anyway.
impl std::fmt::Debug for SendInputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendInputSink")
            .field("buffered", &self.buf.len())
            .finish()
    }
}

/// Build the native record. `time` and `dwExtraInfo` are always zero.
pub(crate) fn to_native(record: &InputRecord) -> INPUT {
    match record {
        InputRecord::Keyboard(k) => INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: k.key.code(),
                    wScan: k.scan,
                    dwFlags: k.flags.bits(),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        },
        InputRecord::Mouse(m) => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: m.dx,
                    dy: m.dy,
                    // Bit pattern is what matters; negative wheel deltas stay negative.
                    mouseData: m.mouse_data as _,
                    dwFlags: m.flags.bits(),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        },
    }
}

impl InjectionSink for SendInputSink {
    fn inject(&mut self, batch: &[InputRecord]) -> Result<usize, InjectError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let count = u32::try_from(batch.len()).map_err(|_| InjectError::TooLarge(batch.len()))?;

        self.buf.clear();
        self.buf.extend(batch.iter().map(to_native));

        // SAFETY: `buf` holds `count` initialized INPUTs and outlives the call;
        // cbSize is the size of one element as SendInput requires.
        let sent = unsafe {
            SendInput(
                count,
                self.buf.as_ptr(),
                core::mem::size_of::<INPUT>() as i32,
            )
        };

        if sent == 0 {
            // SAFETY: plain thread-local error query.
            let code = unsafe { GetLastError() };
            log::warn!("SendInput blocked {} record(s) (os error {code})", batch.len());
            return Err(InjectError::Os(code));
        }
        Ok(sent as usize)
    }

    fn name(&self) -> &str {
        "sendinput"
    }
}
