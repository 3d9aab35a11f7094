//! Synthetic input builder.
//!
//! [`InputBuilder`] accumulates an ordered list of [`InputRecord`]s. Every append
//! takes the builder by value and hands it back, so a chain is owned by exactly one
//! caller from construction to [`InputBuilder::into_batch`]:
//!
//! ```
//! use synthput::{InputBuilder, VirtualKey};
//!
//! let batch = InputBuilder::new()
//!     .key_down(VirtualKey::SHIFT)
//!     .key_press(VirtualKey::A)
//!     .key_up(VirtualKey::SHIFT)
//!     .into_batch();
//! assert_eq!(batch.len(), 4);
//! ```
//!
//! # Semantics
//! - Records come out in call order. Composite appends (press, click, character)
//!   push all of their records before returning.
//! - No append can fail. Key codes and X-button ids are passed through unchecked;
//!   the OS is the final judge of validity.
//! - Absolute coordinates are taken as already normalized (`0..=65535`). The builder
//!   never rescales.
//! - Wheel amounts are stored verbatim, sign included. Converting "clicks" into
//!   `WHEEL_DELTA` units is the caller's job (see [`crate::simulator`]).

use crate::flags::MouseFlags;
use crate::keycode::VirtualKey;
use crate::record::{InputRecord, KeyboardInput, MouseButton, MouseInput};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, Index};

/// Ordered, append-only accumulator of input records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use = "builder methods return the builder; dropping it discards the appended records"]
pub struct InputBuilder {
    records: Vec<InputRecord>,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn push(mut self, record: impl Into<InputRecord>) -> Self {
        self.records.push(record.into());
        self
    }

    // ---- keyboard ----

    /// Append a key-down record.
    pub fn key_down(self, key: VirtualKey) -> Self {
        self.push(KeyboardInput::virtual_key(key, false))
    }

    /// Append a key-up record.
    pub fn key_up(self, key: VirtualKey) -> Self {
        self.push(KeyboardInput::virtual_key(key, true))
    }

    /// Append a key-down immediately followed by the matching key-up.
    pub fn key_press(self, key: VirtualKey) -> Self {
        self.key_down(key).key_up(key)
    }

    /// Append a Unicode down/up pair for one UTF-16 code unit.
    pub fn character(self, unit: u16) -> Self {
        self.push(KeyboardInput::unicode(unit, false))
            .push(KeyboardInput::unicode(unit, true))
    }

    /// Append one [`character`](Self::character) pair per code unit, in order.
    pub fn characters<I>(self, units: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        units
            .into_iter()
            .fold(self, |builder, unit| builder.character(unit))
    }

    /// UTF-16 encode `text` and append its code units.
    ///
    /// Characters outside the BMP become two surrogate pairs (4 records).
    pub fn text(self, text: &str) -> Self {
        self.characters(text.encode_utf16())
    }

    // ---- mouse movement ----

    /// Append a relative move by a pixel delta.
    pub fn relative_move(self, dx: i32, dy: i32) -> Self {
        self.push(MouseInput::movement(dx, dy, MouseFlags::MOVE))
    }

    /// Append an absolute move in primary-monitor normalized coordinates.
    pub fn absolute_move(self, x: i32, y: i32) -> Self {
        self.push(MouseInput::movement(
            x,
            y,
            MouseFlags::MOVE | MouseFlags::ABSOLUTE,
        ))
    }

    /// Append an absolute move in virtual-desktop (all monitors) normalized coordinates.
    pub fn absolute_move_virtual_desktop(self, x: i32, y: i32) -> Self {
        self.push(MouseInput::movement(
            x,
            y,
            MouseFlags::MOVE | MouseFlags::ABSOLUTE | MouseFlags::VIRTUAL_DESK,
        ))
    }

    // ---- mouse buttons ----

    pub fn button_down(self, button: MouseButton) -> Self {
        self.push(MouseInput::with_flags(button.down_flag()))
    }

    pub fn button_up(self, button: MouseButton) -> Self {
        self.push(MouseInput::with_flags(button.up_flag()))
    }

    pub fn button_click(self, button: MouseButton) -> Self {
        self.button_down(button).button_up(button)
    }

    /// Two full clicks (4 records), not a single OS double-click event.
    pub fn button_double_click(self, button: MouseButton) -> Self {
        self.button_click(button).button_click(button)
    }

    // ---- extension buttons ----

    /// Append an X-button press; `id` goes into `mouse_data` unchanged.
    pub fn x_button_down(self, id: i32) -> Self {
        self.push(MouseInput::with_data(id, MouseFlags::X_DOWN))
    }

    pub fn x_button_up(self, id: i32) -> Self {
        self.push(MouseInput::with_data(id, MouseFlags::X_UP))
    }

    pub fn x_button_click(self, id: i32) -> Self {
        self.x_button_down(id).x_button_up(id)
    }

    pub fn x_button_double_click(self, id: i32) -> Self {
        self.x_button_click(id).x_button_click(id)
    }

    // ---- wheel ----

    /// Positive scrolls away from the user, negative toward.
    pub fn vertical_scroll(self, amount: i32) -> Self {
        self.push(MouseInput::with_data(amount, MouseFlags::VERTICAL_WHEEL))
    }

    /// Positive scrolls right, negative left.
    pub fn horizontal_scroll(self, amount: i32) -> Self {
        self.push(MouseInput::with_data(amount, MouseFlags::HORIZONTAL_WHEEL))
    }

    // ---- inspection / materialize ----

    /// Append every record from another builder, in its order.
    pub fn append(mut self, other: InputBuilder) -> Self {
        self.records.extend(other.records);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&InputRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputRecord> {
        self.records.iter()
    }

    /// Copy the current records into an immutable batch.
    ///
    /// The batch shares nothing with the builder; calling this twice without
    /// appending in between yields equal batches.
    #[must_use]
    pub fn snapshot(&self) -> InputBatch {
        InputBatch(self.records.as_slice().into())
    }

    /// Consume the builder and return its records as an immutable batch.
    #[must_use]
    pub fn into_batch(self) -> InputBatch {
        InputBatch(self.records.into_boxed_slice())
    }
}

impl Index<usize> for InputBuilder {
    type Output = InputRecord;

    fn index(&self, index: usize) -> &InputRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a InputBuilder {
    type Item = &'a InputRecord;
    type IntoIter = std::slice::Iter<'a, InputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Materialized, immutable record array ready for one submission.
///
/// Derefs to `[InputRecord]`, so slicing, `len()` and iteration work directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputBatch(Box<[InputRecord]>);

impl InputBatch {
    /// Records in submission order.
    #[inline]
    pub fn records(&self) -> &[InputRecord] {
        &self.0
    }

    /// Consume the batch and return the boxed slice.
    #[inline]
    pub fn into_inner(self) -> Box<[InputRecord]> {
        self.0
    }
}

impl Deref for InputBatch {
    type Target = [InputRecord];

    fn deref(&self) -> &[InputRecord] {
        &self.0
    }
}

impl AsRef<[InputRecord]> for InputBatch {
    fn as_ref(&self) -> &[InputRecord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a InputBatch {
    type Item = &'a InputRecord;
    type IntoIter = std::slice::Iter<'a, InputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<InputBuilder> for InputBatch {
    fn from(builder: InputBuilder) -> Self {
        builder.into_batch()
    }
}

impl FromIterator<InputRecord> for InputBatch {
    fn from_iter<T: IntoIterator<Item = InputRecord>>(iter: T) -> Self {
        InputBatch(iter.into_iter().collect())
    }
}
