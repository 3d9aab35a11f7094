//! Virtual key codes.
//!
//! [`VirtualKey`] is a thin `u16` newtype over the Windows virtual-key domain. Any
//! value in range is accepted; the named constants cover the documented table so
//! call sites can write `VirtualKey::SHIFT` instead of `0x10`.
//!
//! ## Extended keys
//! Some keys share a scan code with a non-extended twin (right Ctrl vs left Ctrl,
//! the navigation cluster vs the numeric keypad). Records for those keys must carry
//! the extended-key flag or the OS injects the twin instead. The classification is
//! a fixed table, see [`VirtualKey::is_extended`].
//!
//! ## Names
//! Keys parse from their constant name (`"SHIFT"`, `"F5"`, `"OEM_PLUS"`), from a
//! single ASCII letter or digit (`"a"`, `"7"`), or from a number (`"0x41"`, `"65"`).
//! Serde accepts either a name or an integer and writes the name when one exists.

use crate::error::ParseKeyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Windows virtual key code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualKey(pub u16);

macro_rules! virtual_keys {
    ($($name:ident = $code:literal,)*) => {
        #[allow(missing_docs)]
        impl VirtualKey {
            $(pub const $name: VirtualKey = VirtualKey($code);)*
        }

        /// Name table in declaration order. Aliases come after the primary name,
        /// so the first hit for a code is its canonical name.
        const NAMED_KEYS: &[(&str, VirtualKey)] = &[
            $((stringify!($name), VirtualKey($code)),)*
        ];
    };
}

virtual_keys! {
    LBUTTON = 0x01,
    RBUTTON = 0x02,
    CANCEL = 0x03,
    MBUTTON = 0x04,
    XBUTTON1 = 0x05,
    XBUTTON2 = 0x06,
    BACK = 0x08,
    TAB = 0x09,
    CLEAR = 0x0C,
    RETURN = 0x0D,
    SHIFT = 0x10,
    CONTROL = 0x11,
    MENU = 0x12,
    PAUSE = 0x13,
    CAPITAL = 0x14,
    KANA = 0x15,
    JUNJA = 0x17,
    FINAL = 0x18,
    KANJI = 0x19,
    ESCAPE = 0x1B,
    CONVERT = 0x1C,
    NONCONVERT = 0x1D,
    ACCEPT = 0x1E,
    MODECHANGE = 0x1F,
    SPACE = 0x20,
    PRIOR = 0x21,
    NEXT = 0x22,
    END = 0x23,
    HOME = 0x24,
    LEFT = 0x25,
    UP = 0x26,
    RIGHT = 0x27,
    DOWN = 0x28,
    SELECT = 0x29,
    PRINT = 0x2A,
    EXECUTE = 0x2B,
    SNAPSHOT = 0x2C,
    INSERT = 0x2D,
    DELETE = 0x2E,
    HELP = 0x2F,
    KEY_0 = 0x30,
    KEY_1 = 0x31,
    KEY_2 = 0x32,
    KEY_3 = 0x33,
    KEY_4 = 0x34,
    KEY_5 = 0x35,
    KEY_6 = 0x36,
    KEY_7 = 0x37,
    KEY_8 = 0x38,
    KEY_9 = 0x39,
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    LWIN = 0x5B,
    RWIN = 0x5C,
    APPS = 0x5D,
    SLEEP = 0x5F,
    NUMPAD0 = 0x60,
    NUMPAD1 = 0x61,
    NUMPAD2 = 0x62,
    NUMPAD3 = 0x63,
    NUMPAD4 = 0x64,
    NUMPAD5 = 0x65,
    NUMPAD6 = 0x66,
    NUMPAD7 = 0x67,
    NUMPAD8 = 0x68,
    NUMPAD9 = 0x69,
    MULTIPLY = 0x6A,
    ADD = 0x6B,
    SEPARATOR = 0x6C,
    SUBTRACT = 0x6D,
    DECIMAL = 0x6E,
    DIVIDE = 0x6F,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    F13 = 0x7C,
    F14 = 0x7D,
    F15 = 0x7E,
    F16 = 0x7F,
    F17 = 0x80,
    F18 = 0x81,
    F19 = 0x82,
    F20 = 0x83,
    F21 = 0x84,
    F22 = 0x85,
    F23 = 0x86,
    F24 = 0x87,
    NUMLOCK = 0x90,
    SCROLL = 0x91,
    LSHIFT = 0xA0,
    RSHIFT = 0xA1,
    LCONTROL = 0xA2,
    RCONTROL = 0xA3,
    LMENU = 0xA4,
    RMENU = 0xA5,
    BROWSER_BACK = 0xA6,
    BROWSER_FORWARD = 0xA7,
    BROWSER_REFRESH = 0xA8,
    BROWSER_STOP = 0xA9,
    BROWSER_SEARCH = 0xAA,
    BROWSER_FAVORITES = 0xAB,
    BROWSER_HOME = 0xAC,
    VOLUME_MUTE = 0xAD,
    VOLUME_DOWN = 0xAE,
    VOLUME_UP = 0xAF,
    MEDIA_NEXT_TRACK = 0xB0,
    MEDIA_PREV_TRACK = 0xB1,
    MEDIA_STOP = 0xB2,
    MEDIA_PLAY_PAUSE = 0xB3,
    LAUNCH_MAIL = 0xB4,
    LAUNCH_MEDIA_SELECT = 0xB5,
    LAUNCH_APP1 = 0xB6,
    LAUNCH_APP2 = 0xB7,
    OEM_1 = 0xBA,
    OEM_PLUS = 0xBB,
    OEM_COMMA = 0xBC,
    OEM_MINUS = 0xBD,
    OEM_PERIOD = 0xBE,
    OEM_2 = 0xBF,
    OEM_3 = 0xC0,
    OEM_4 = 0xDB,
    OEM_5 = 0xDC,
    OEM_6 = 0xDD,
    OEM_7 = 0xDE,
    OEM_8 = 0xDF,
    OEM_102 = 0xE2,
    PROCESSKEY = 0xE5,
    PACKET = 0xE7,
    ATTN = 0xF6,
    CRSEL = 0xF7,
    EXSEL = 0xF8,
    EREOF = 0xF9,
    PLAY = 0xFA,
    ZOOM = 0xFB,
    NONAME = 0xFC,
    PA1 = 0xFD,
    OEM_CLEAR = 0xFE,
    // aliases
    HANGUL = 0x15,
    HANJA = 0x19,
    ALT = 0x12,
    ENTER = 0x0D,
    ESC = 0x1B,
    BACKSPACE = 0x08,
    PAGE_UP = 0x21,
    PAGE_DOWN = 0x22,
}

impl VirtualKey {
    /// Raw key code.
    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// `true` for keys that must be injected with the extended-key flag.
    ///
    /// Alt and Ctrl (generic and right-hand), the navigation cluster (Insert, Delete,
    /// Home, End, Page Up/Down, arrows), Num Lock, Cancel/Break, Print Screen and the
    /// keypad divide key. Everything else, including Shift, is non-extended.
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            Self::MENU
                | Self::LMENU
                | Self::RMENU
                | Self::CONTROL
                | Self::RCONTROL
                | Self::INSERT
                | Self::DELETE
                | Self::HOME
                | Self::END
                | Self::PRIOR
                | Self::NEXT
                | Self::RIGHT
                | Self::UP
                | Self::LEFT
                | Self::DOWN
                | Self::NUMLOCK
                | Self::CANCEL
                | Self::SNAPSHOT
                | Self::DIVIDE
        )
    }

    /// Canonical constant name, if the code is in the named table.
    pub fn name(self) -> Option<&'static str> {
        NAMED_KEYS
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(name, _)| *name)
    }

    /// Looks a key up by constant name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_KEYS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, key)| *key)
    }

    /// Key for an ASCII letter or digit (`'a'` and `'A'` both map to `A`).
    ///
    /// This is the fixed VK numbering for `0-9` / `A-Z`, not a layout lookup.
    pub fn from_ascii_alphanumeric(c: char) -> Option<Self> {
        if c.is_ascii_alphanumeric() {
            Some(VirtualKey(c.to_ascii_uppercase() as u16))
        } else {
            None
        }
    }
}

impl From<u16> for VirtualKey {
    fn from(code: u16) -> Self {
        VirtualKey(code)
    }
}

impl From<VirtualKey> for u16 {
    fn from(key: VirtualKey) -> Self {
        key.0
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

impl FromStr for VirtualKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(key) = Self::from_ascii_alphanumeric(c) {
                return Ok(key);
            }
        }

        if let Some(key) = Self::from_name(s) {
            return Ok(key);
        }

        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u16::from_str_radix(hex, 16),
            None => s.parse::<u16>(),
        };
        parsed
            .map(VirtualKey)
            .map_err(|_| ParseKeyError::Unknown(s.to_string()))
    }
}

impl Serialize for VirtualKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u16(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for VirtualKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(u16),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => Ok(VirtualKey(code)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENDED: [VirtualKey; 19] = [
        VirtualKey::MENU,
        VirtualKey::LMENU,
        VirtualKey::RMENU,
        VirtualKey::CONTROL,
        VirtualKey::RCONTROL,
        VirtualKey::INSERT,
        VirtualKey::DELETE,
        VirtualKey::HOME,
        VirtualKey::END,
        VirtualKey::PRIOR,
        VirtualKey::NEXT,
        VirtualKey::RIGHT,
        VirtualKey::UP,
        VirtualKey::LEFT,
        VirtualKey::DOWN,
        VirtualKey::NUMLOCK,
        VirtualKey::CANCEL,
        VirtualKey::SNAPSHOT,
        VirtualKey::DIVIDE,
    ];

    #[test]
    fn extended_table_matches_exactly() {
        for code in 0..=u16::MAX {
            let key = VirtualKey(code);
            assert_eq!(key.is_extended(), EXTENDED.contains(&key), "code 0x{code:04X}");
        }
    }

    #[test]
    fn left_hand_modifiers_and_shift_are_not_extended() {
        assert!(!VirtualKey::SHIFT.is_extended());
        assert!(!VirtualKey::LSHIFT.is_extended());
        assert!(!VirtualKey::RSHIFT.is_extended());
        assert!(!VirtualKey::LCONTROL.is_extended());
        assert!(!VirtualKey::NUMPAD0.is_extended());
    }

    #[test]
    fn parses_names_letters_and_numbers() {
        assert_eq!("SHIFT".parse::<VirtualKey>().unwrap(), VirtualKey::SHIFT);
        assert_eq!("oem_plus".parse::<VirtualKey>().unwrap(), VirtualKey::OEM_PLUS);
        assert_eq!("a".parse::<VirtualKey>().unwrap(), VirtualKey::A);
        assert_eq!("7".parse::<VirtualKey>().unwrap(), VirtualKey::KEY_7);
        assert_eq!("0x2E".parse::<VirtualKey>().unwrap(), VirtualKey::DELETE);
        assert_eq!("112".parse::<VirtualKey>().unwrap(), VirtualKey::F1);
        assert!(matches!("".parse::<VirtualKey>(), Err(ParseKeyError::Empty)));
        assert!(matches!(
            "NOT_A_KEY".parse::<VirtualKey>(),
            Err(ParseKeyError::Unknown(_))
        ));
    }

    #[test]
    fn canonical_name_wins_over_alias() {
        assert_eq!(VirtualKey::ALT.name(), Some("MENU"));
        assert_eq!(VirtualKey::ENTER.to_string(), "RETURN");
        assert_eq!(VirtualKey(0x07).to_string(), "0x07");
    }

    #[test]
    fn serde_accepts_name_or_code() {
        let keys: Vec<VirtualKey> = serde_json::from_str(r#"["CONTROL", 65, "f5"]"#).unwrap();
        assert_eq!(keys, vec![VirtualKey::CONTROL, VirtualKey::A, VirtualKey::F5]);

        let json = serde_json::to_string(&[VirtualKey::DELETE, VirtualKey(0x07)]).unwrap();
        assert_eq!(json, r#"["DELETE",7]"#);
    }
}
