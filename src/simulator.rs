//! Fluent keyboard/mouse simulator.
//!
//! [`Simulator`] owns an [`InjectionSink`] and a [`KeyStateReader`] and exposes two
//! facades. Each facade call builds one [`InputBuilder`] and submits it as a single
//! batch, so a call like [`KeyboardSimulator::modified_key_stroke`] cannot be split
//! by input from other sources.
//!
//! ```
//! use synthput::{RecordingSink, Simulator, VirtualKey, VirtualKeyState};
//!
//! let mut sim = Simulator::new(RecordingSink::new(), VirtualKeyState::new());
//! sim.keyboard()
//!     .modified_key_stroke(&[VirtualKey::CONTROL], &[VirtualKey::C])?
//!     .text_entry("hi")?;
//! sim.mouse().move_by(10, -10)?.left_button_click()?;
//!
//! assert_eq!(sim.sink().batches().len(), 4);
//! # Ok::<(), synthput::InjectError>(())
//! ```
//!
//! This layer converts caller units into record units: scroll "clicks" are
//! multiplied by [`MouseConfig::wheel_click_size`](crate::config::MouseConfig) and
//! floating absolute coordinates are truncated. It never sleeps between calls.

use crate::builder::{InputBatch, InputBuilder};
use crate::config::Config;
use crate::error::InjectError;
use crate::key_state::KeyStateReader;
use crate::keycode::VirtualKey;
use crate::record::MouseButton;
use crate::script::Script;
use crate::sink::{submit, InjectionSink};

/// Sink + key-state reader + configuration.
#[derive(Debug)]
pub struct Simulator<S, K> {
    sink: S,
    key_state: K,
    config: Config,
}

impl<S: InjectionSink, K: KeyStateReader> Simulator<S, K> {
    pub fn new(sink: S, key_state: K) -> Self {
        Self::with_config(sink, key_state, Config::default())
    }

    pub fn with_config(sink: S, key_state: K, config: Config) -> Self {
        Self {
            sink,
            key_state,
            config,
        }
    }

    pub fn keyboard(&mut self) -> KeyboardSimulator<'_, S> {
        KeyboardSimulator {
            sink: &mut self.sink,
            config: &self.config,
        }
    }

    pub fn mouse(&mut self) -> MouseSimulator<'_, S> {
        MouseSimulator {
            sink: &mut self.sink,
            config: &self.config,
        }
    }

    /// Submit a prepared builder as one batch.
    pub fn send(&mut self, builder: InputBuilder) -> Result<InputBatch, InjectError> {
        submit(&mut self.sink, builder)
    }

    /// Compile `script` and submit it as one batch.
    pub fn run_script(&mut self, script: &Script) -> Result<InputBatch, InjectError> {
        log::debug!("running script `{}` ({} step(s))", script.name, script.steps.len());
        self.send(script.build())
    }

    pub fn key_state(&self) -> &K {
        &self.key_state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_parts(self) -> (S, K) {
        (self.sink, self.key_state)
    }
}

#[cfg(all(feature = "sendinput", target_os = "windows"))]
impl Simulator<crate::backends::windows::SendInputSink, crate::backends::windows::WindowsKeyState> {
    /// `SendInput` sink and Win32 key-state reader.
    pub fn windows() -> Self {
        Self::new(
            crate::backends::windows::SendInputSink::new(),
            crate::backends::windows::WindowsKeyState,
        )
    }
}

/// Keyboard facade; every method is one submission.
#[derive(Debug)]
pub struct KeyboardSimulator<'a, S> {
    sink: &'a mut S,
    config: &'a Config,
}

impl<'a, S: InjectionSink> KeyboardSimulator<'a, S> {
    fn send(&mut self, builder: InputBuilder) -> Result<&mut Self, InjectError> {
        submit(&mut *self.sink, builder)?;
        Ok(self)
    }

    pub fn key_down(&mut self, key: VirtualKey) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().key_down(key))
    }

    pub fn key_up(&mut self, key: VirtualKey) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().key_up(key))
    }

    pub fn key_press(&mut self, key: VirtualKey) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().key_press(key))
    }

    /// Press each key in turn, all in one batch.
    pub fn key_presses(&mut self, keys: &[VirtualKey]) -> Result<&mut Self, InjectError> {
        let builder = keys
            .iter()
            .fold(InputBuilder::with_capacity(keys.len() * 2), |b, k| {
                b.key_press(*k)
            });
        self.send(builder)
    }

    /// Hold `modifiers` (in order), press `keys` (in order), release `modifiers`
    /// in reverse order. One batch.
    pub fn modified_key_stroke(
        &mut self,
        modifiers: &[VirtualKey],
        keys: &[VirtualKey],
    ) -> Result<&mut Self, InjectError> {
        let mut builder = InputBuilder::with_capacity(modifiers.len() * 2 + keys.len() * 2);
        for m in modifiers {
            builder = builder.key_down(*m);
        }
        for k in keys {
            builder = builder.key_press(*k);
        }
        for m in modifiers.iter().rev() {
            builder = builder.key_up(*m);
        }
        self.send(builder)
    }

    /// Type `text` as Unicode input.
    pub fn text_entry(&mut self, text: &str) -> Result<&mut Self, InjectError> {
        let builder = if self.config.keyboard.control_chars_as_keys {
            text_with_control_keys(text)
        } else {
            InputBuilder::new().text(text)
        };
        self.send(builder)
    }

    pub fn char_entry(&mut self, c: char) -> Result<&mut Self, InjectError> {
        let mut buf = [0u8; 4];
        self.text_entry(c.encode_utf8(&mut buf))
    }
}

fn text_with_control_keys(text: &str) -> InputBuilder {
    let mut builder = InputBuilder::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        builder = match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                builder.key_press(VirtualKey::RETURN)
            }
            '\n' => builder.key_press(VirtualKey::RETURN),
            '\t' => builder.key_press(VirtualKey::TAB),
            _ => {
                let mut units = [0u16; 2];
                builder.characters(c.encode_utf16(&mut units).iter().copied())
            }
        };
    }
    builder
}

/// Mouse facade; every method is one submission.
#[derive(Debug)]
pub struct MouseSimulator<'a, S> {
    sink: &'a mut S,
    config: &'a Config,
}

impl<'a, S: InjectionSink> MouseSimulator<'a, S> {
    fn send(&mut self, builder: InputBuilder) -> Result<&mut Self, InjectError> {
        submit(&mut *self.sink, builder)?;
        Ok(self)
    }

    fn wheel_units(&self, clicks: i32) -> i32 {
        clicks.saturating_mul(self.config.mouse.wheel_click_size)
    }

    /// Move by a pixel delta.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().relative_move(dx, dy))
    }

    /// Move to normalized primary-monitor coordinates (`0.0..=65535.0`, truncated).
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().absolute_move(x.trunc() as i32, y.trunc() as i32))
    }

    /// Move to normalized virtual-desktop coordinates (`0.0..=65535.0`, truncated).
    pub fn move_to_on_virtual_desktop(&mut self, x: f64, y: f64) -> Result<&mut Self, InjectError> {
        self.send(
            InputBuilder::new().absolute_move_virtual_desktop(x.trunc() as i32, y.trunc() as i32),
        )
    }

    pub fn button_down(&mut self, button: MouseButton) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().button_down(button))
    }

    pub fn button_up(&mut self, button: MouseButton) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().button_up(button))
    }

    pub fn button_click(&mut self, button: MouseButton) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().button_click(button))
    }

    pub fn button_double_click(&mut self, button: MouseButton) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().button_double_click(button))
    }

    pub fn left_button_down(&mut self) -> Result<&mut Self, InjectError> {
        self.button_down(MouseButton::Left)
    }

    pub fn left_button_up(&mut self) -> Result<&mut Self, InjectError> {
        self.button_up(MouseButton::Left)
    }

    pub fn left_button_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_click(MouseButton::Left)
    }

    pub fn left_button_double_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_double_click(MouseButton::Left)
    }

    pub fn right_button_down(&mut self) -> Result<&mut Self, InjectError> {
        self.button_down(MouseButton::Right)
    }

    pub fn right_button_up(&mut self) -> Result<&mut Self, InjectError> {
        self.button_up(MouseButton::Right)
    }

    pub fn right_button_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_click(MouseButton::Right)
    }

    pub fn right_button_double_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_double_click(MouseButton::Right)
    }

    pub fn middle_button_down(&mut self) -> Result<&mut Self, InjectError> {
        self.button_down(MouseButton::Middle)
    }

    pub fn middle_button_up(&mut self) -> Result<&mut Self, InjectError> {
        self.button_up(MouseButton::Middle)
    }

    pub fn middle_button_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_click(MouseButton::Middle)
    }

    pub fn middle_button_double_click(&mut self) -> Result<&mut Self, InjectError> {
        self.button_double_click(MouseButton::Middle)
    }

    pub fn x_button_down(&mut self, id: i32) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().x_button_down(id))
    }

    pub fn x_button_up(&mut self, id: i32) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().x_button_up(id))
    }

    pub fn x_button_click(&mut self, id: i32) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().x_button_click(id))
    }

    pub fn x_button_double_click(&mut self, id: i32) -> Result<&mut Self, InjectError> {
        self.send(InputBuilder::new().x_button_double_click(id))
    }

    /// Scroll by whole wheel clicks; positive is away from the user.
    pub fn vertical_scroll(&mut self, clicks: i32) -> Result<&mut Self, InjectError> {
        let amount = self.wheel_units(clicks);
        self.send(InputBuilder::new().vertical_scroll(amount))
    }

    /// Scroll by whole wheel clicks; positive is to the right.
    pub fn horizontal_scroll(&mut self, clicks: i32) -> Result<&mut Self, InjectError> {
        let amount = self.wheel_units(clicks);
        self.send(InputBuilder::new().horizontal_scroll(amount))
    }
}
