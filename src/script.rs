//! Serializable input scripts.
//!
//! A [`Script`] is a named list of [`Step`]s, each mapping onto one builder
//! operation. Scripts load from TOML or JSON and compile to a single
//! [`InputBuilder`], so running one is a single atomic submission.
//!
//! ```toml
//! name = "save-as"
//! description = "Ctrl+Shift+S, then type a file name"
//!
//! [[steps]]
//! op = "key_down"
//! key = "CONTROL"
//!
//! [[steps]]
//! op = "key_press"
//! key = "S"
//!
//! [[steps]]
//! op = "key_up"
//! key = "CONTROL"
//!
//! [[steps]]
//! op = "text"
//! text = "report.txt"
//! ```
//!
//! Keys accept any form [`VirtualKey`]'s parser does: names, single letters or
//! digits, and numbers.

use crate::builder::InputBuilder;
use crate::error::ScriptError;
use crate::keycode::VirtualKey;
use crate::record::MouseButton;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One builder operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    KeyDown { key: VirtualKey },
    KeyUp { key: VirtualKey },
    KeyPress { key: VirtualKey },
    /// Single UTF-16 code unit.
    Character { unit: u16 },
    Text { text: String },
    MoveBy { dx: i32, dy: i32 },
    MoveTo { x: i32, y: i32 },
    MoveToVirtualDesktop { x: i32, y: i32 },
    ButtonDown { button: MouseButton },
    ButtonUp { button: MouseButton },
    Click { button: MouseButton },
    DoubleClick { button: MouseButton },
    XButtonDown { id: i32 },
    XButtonUp { id: i32 },
    XButtonClick { id: i32 },
    XButtonDoubleClick { id: i32 },
    /// Raw wheel amount (`120` per notch).
    Scroll { amount: i32 },
    /// Raw horizontal wheel amount.
    HScroll { amount: i32 },
}

impl Step {
    /// Append this step's records to `builder`.
    pub fn apply(&self, builder: InputBuilder) -> InputBuilder {
        match self {
            Step::KeyDown { key } => builder.key_down(*key),
            Step::KeyUp { key } => builder.key_up(*key),
            Step::KeyPress { key } => builder.key_press(*key),
            Step::Character { unit } => builder.character(*unit),
            Step::Text { text } => builder.text(text),
            Step::MoveBy { dx, dy } => builder.relative_move(*dx, *dy),
            Step::MoveTo { x, y } => builder.absolute_move(*x, *y),
            Step::MoveToVirtualDesktop { x, y } => builder.absolute_move_virtual_desktop(*x, *y),
            Step::ButtonDown { button } => builder.button_down(*button),
            Step::ButtonUp { button } => builder.button_up(*button),
            Step::Click { button } => builder.button_click(*button),
            Step::DoubleClick { button } => builder.button_double_click(*button),
            Step::XButtonDown { id } => builder.x_button_down(*id),
            Step::XButtonUp { id } => builder.x_button_up(*id),
            Step::XButtonClick { id } => builder.x_button_click(*id),
            Step::XButtonDoubleClick { id } => builder.x_button_double_click(*id),
            Step::Scroll { amount } => builder.vertical_scroll(*amount),
            Step::HScroll { amount } => builder.horizontal_scroll(*amount),
        }
    }
}

/// Named, serializable sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml_str(s: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load by extension: `.toml` or `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let contents = fs::read_to_string(path)?;
        match ext.as_str() {
            "toml" => Self::from_toml_str(&contents),
            "json" => Self::from_json_str(&contents),
            _ => Err(ScriptError::UnknownFormat(ext)),
        }
    }

    /// Compile all steps, in order, into one builder.
    pub fn build(&self) -> InputBuilder {
        self.steps
            .iter()
            .fold(InputBuilder::new(), |builder, step| step.apply(builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::MouseFlags;
    use crate::record::InputRecord;

    const SAVE_AS: &str = r#"
name = "save-as"

[[steps]]
op = "key_down"
key = "CONTROL"

[[steps]]
op = "key_press"
key = "s"

[[steps]]
op = "key_up"
key = 0x11

[[steps]]
op = "text"
text = "ok"
"#;

    #[test]
    fn toml_script_builds_in_order() {
        let script = Script::from_toml_str(SAVE_AS).unwrap();
        assert_eq!(script.name, "save-as");
        assert_eq!(script.description, None);
        assert_eq!(script.steps.len(), 4);

        let b = script.build();
        assert_eq!(b.len(), 1 + 2 + 1 + 4);
        assert_eq!(b[0].as_keyboard().unwrap().key, VirtualKey::CONTROL);
        assert!(b[0].as_keyboard().unwrap().is_extended());
        assert_eq!(b[1].as_keyboard().unwrap().key, VirtualKey::S);
        assert!(b[3].as_keyboard().unwrap().is_key_up());
        assert!(b[4].as_keyboard().unwrap().is_unicode());
    }

    #[test]
    fn json_mouse_script() {
        let script = Script::from_json_str(
            r#"{
                "name": "drag",
                "steps": [
                    {"op": "move_to", "x": 0, "y": 0},
                    {"op": "button_down", "button": "left"},
                    {"op": "move_by", "dx": 40, "dy": 0},
                    {"op": "button_up", "button": "left"},
                    {"op": "scroll", "amount": -120},
                    {"op": "x_button_click", "id": 2}
                ]
            }"#,
        )
        .unwrap();

        let flags: Vec<MouseFlags> = script
            .build()
            .iter()
            .filter_map(InputRecord::as_mouse)
            .map(|m| m.flags)
            .collect();
        assert_eq!(
            flags,
            vec![
                MouseFlags::MOVE | MouseFlags::ABSOLUTE,
                MouseFlags::LEFT_DOWN,
                MouseFlags::MOVE,
                MouseFlags::LEFT_UP,
                MouseFlags::VERTICAL_WHEEL,
                MouseFlags::X_DOWN,
                MouseFlags::X_UP,
            ]
        );
    }

    #[test]
    fn unknown_key_name_is_rejected() {
        let err = Script::from_json_str(
            r#"{"name": "bad", "steps": [{"op": "key_press", "key": "NOPE"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
    }

    #[test]
    fn serializes_key_names() {
        let script = Script {
            name: "tab".into(),
            description: None,
            steps: vec![Step::KeyPress { key: VirtualKey::TAB }],
        };
        let toml = toml::to_string(&script).unwrap();
        assert!(toml.contains("key = \"TAB\""));
        assert_eq!(Script::from_toml_str(&toml).unwrap(), script);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("synthput-script-{}.yaml", std::process::id()));
        fs::write(&path, "name: x").unwrap();
        let err = Script::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, ScriptError::UnknownFormat(ext) if ext == "yaml"));
    }
}
