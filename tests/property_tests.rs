use proptest::prelude::*;
use synthput::{InputBuilder, InputRecord, KeyboardFlags, VirtualKey};

fn keyboard(record: &InputRecord) -> (VirtualKey, u16, KeyboardFlags) {
    let k = record.as_keyboard().expect("keyboard record");
    (k.key, k.scan, k.flags)
}

// Strategy mixing the extended table with arbitrary codes
fn key_strategy() -> impl Strategy<Value = VirtualKey> {
    prop_oneof![
        Just(VirtualKey::CONTROL),
        Just(VirtualKey::RMENU),
        Just(VirtualKey::DIVIDE),
        Just(VirtualKey::SHIFT),
        Just(VirtualKey::RETURN),
        any::<u16>().prop_map(VirtualKey),
    ]
}

// Strategy for code units, biased toward the 0xE0xx block
fn unit_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![0xE000u16..=0xE0FF, any::<u16>()]
}

proptest! {
    #[test]
    fn key_down_extended_flag_follows_table(key in key_strategy()) {
        let b = InputBuilder::new().key_down(key);
        let (code, scan, flags) = keyboard(&b[0]);
        prop_assert_eq!(code, key);
        prop_assert_eq!(scan, 0);
        prop_assert_eq!(flags.contains(KeyboardFlags::EXTENDED_KEY), key.is_extended());
        prop_assert!(!flags.contains(KeyboardFlags::KEY_UP));
    }

    #[test]
    fn key_press_is_matching_down_up(key in key_strategy()) {
        let batch = InputBuilder::new().key_press(key).into_batch();
        prop_assert_eq!(batch.len(), 2);

        let (down_key, _, down) = keyboard(&batch[0]);
        let (up_key, _, up) = keyboard(&batch[1]);
        prop_assert_eq!(down_key, up_key);
        prop_assert!(!down.contains(KeyboardFlags::KEY_UP));
        prop_assert!(up.contains(KeyboardFlags::KEY_UP));
        prop_assert_eq!(
            down.contains(KeyboardFlags::EXTENDED_KEY),
            up.contains(KeyboardFlags::EXTENDED_KEY)
        );
    }

    #[test]
    fn character_extended_iff_high_byte_e0(unit in unit_strategy()) {
        let batch = InputBuilder::new().character(unit).into_batch();
        prop_assert_eq!(batch.len(), 2);

        let mut expected = KeyboardFlags::UNICODE;
        if unit & 0xFF00 == 0xE000 {
            expected |= KeyboardFlags::EXTENDED_KEY;
        }
        prop_assert_eq!(keyboard(&batch[0]), (VirtualKey(0), unit, expected));
        prop_assert_eq!(
            keyboard(&batch[1]),
            (VirtualKey(0), unit, expected | KeyboardFlags::KEY_UP)
        );
    }

    #[test]
    fn character_sequence_pairs_stay_adjacent(units in prop::collection::vec(any::<u16>(), 0..64)) {
        let batch = InputBuilder::new().characters(units.iter().copied()).into_batch();
        prop_assert_eq!(batch.len(), units.len() * 2);

        for (i, pair) in batch.chunks(2).enumerate() {
            let (_, down_scan, down) = keyboard(&pair[0]);
            let (_, up_scan, up) = keyboard(&pair[1]);
            prop_assert_eq!(down_scan, units[i]);
            prop_assert_eq!(up_scan, units[i]);
            prop_assert!(!down.contains(KeyboardFlags::KEY_UP));
            prop_assert!(up.contains(KeyboardFlags::KEY_UP));
        }
    }

    #[test]
    fn snapshot_twice_is_identical(keys in prop::collection::vec(key_strategy(), 0..16)) {
        let b = keys.iter().fold(InputBuilder::new(), |b, k| b.key_press(*k));
        prop_assert_eq!(b.snapshot(), b.snapshot());
        prop_assert_eq!(b.snapshot().len(), keys.len() * 2);
    }

    #[test]
    fn wheel_amount_round_trips_sign(amount in any::<i32>()) {
        let b = InputBuilder::new().vertical_scroll(amount).horizontal_scroll(amount);
        prop_assert_eq!(b[0].as_mouse().unwrap().mouse_data, amount);
        prop_assert_eq!(b[1].as_mouse().unwrap().mouse_data, amount);
    }

    #[test]
    fn mouse_records_never_conflict(
        dx in any::<i32>(),
        dy in any::<i32>(),
        id in any::<i32>(),
        amount in any::<i32>(),
    ) {
        let b = InputBuilder::new()
            .relative_move(dx, dy)
            .absolute_move(dx, dy)
            .absolute_move_virtual_desktop(dx, dy)
            .x_button_double_click(id)
            .vertical_scroll(amount)
            .horizontal_scroll(amount);
        for record in &b {
            prop_assert!(!record.as_mouse().unwrap().flags.has_conflicting_transitions());
        }
    }
}
