//! Platform backends for `synthput`.
//!
//! Implementations of [`InjectionSink`](crate::sink::InjectionSink) and
//! [`KeyStateReader`](crate::key_state::KeyStateReader) backed by the host OS.
//!
//! # Feature flags
//! - **`sendinput`**: enables the Windows `SendInput` / `GetKeyState` backend
//!   (default in this build).
//!
//! Other platforms build fine without a backend; use
//! [`RecordingSink`](crate::sink::RecordingSink) and
//! [`VirtualKeyState`](crate::key_state::VirtualKeyState) there.

#[cfg(all(feature = "sendinput", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "sendinput", target_os = "windows"))))]
pub mod windows;
