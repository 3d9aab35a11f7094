//! synthput: synthetic keyboard/mouse input for Rust.
//!
//! Builds ordered batches of `SendInput`-shaped records ("press Shift", "type é",
//! "scroll one notch down") and hands them to an injection sink in one call.
//!
//! - [`InputBuilder`] is the core: every append is total, records come out in call
//!   order, and extended-key / Unicode / absolute flags are set for you.
//! - [`InjectionSink`] consumes a finished [`InputBatch`]. On Windows the
//!   `sendinput` feature provides `SendInputSink`; [`RecordingSink`] works anywhere.
//! - [`KeyStateReader`] answers "is this key down" through two separate views
//!   (message-queue vs hardware).
//! - [`Simulator`] is the fluent layer on top: one submission per call.
//!
//! ```
//! use synthput::{submit, InputBuilder, MouseButton, RecordingSink, VirtualKey};
//!
//! let mut sink = RecordingSink::new();
//! submit(
//!     &mut sink,
//!     InputBuilder::new()
//!         .key_down(VirtualKey::CONTROL)
//!         .key_press(VirtualKey::A)
//!         .key_up(VirtualKey::CONTROL)
//!         .button_click(MouseButton::Left),
//! )?;
//! assert_eq!(sink.batches()[0].len(), 6);
//! # Ok::<(), synthput::InjectError>(())
//! ```

pub mod abi;
pub mod backends;
pub mod builder;
pub mod config;
pub mod error;
pub mod flags;
pub mod key_state;
pub mod keycode;
pub mod record;
pub mod script;
pub mod simulator;
pub mod sink;

pub use builder::{InputBatch, InputBuilder};
pub use config::Config;
pub use error::{ConfigError, InjectError, ParseKeyError, ScriptError};
pub use flags::{KeyboardFlags, MouseFlags};
pub use key_state::{KeyStateReader, VirtualKeyState};
pub use keycode::VirtualKey;
pub use record::{InputRecord, KeyboardInput, MouseButton, MouseInput};
pub use script::{Script, Step};
pub use simulator::{KeyboardSimulator, MouseSimulator, Simulator};
pub use sink::{submit, system_sink, InjectionSink, RecordingSink, UnsupportedSink};

#[cfg(all(feature = "sendinput", target_os = "windows"))]
pub use backends::windows::{SendInputSink, WindowsKeyState};
