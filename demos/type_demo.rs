use synthput::{submit, system_sink, InputBuilder, InputRecord, RecordingSink, VirtualKey};

fn main() {
    env_logger::init();

    // Build a Ctrl+A, then type over the selection
    let builder = InputBuilder::new()
        .key_down(VirtualKey::CONTROL)
        .key_press(VirtualKey::A)
        .key_up(VirtualKey::CONTROL)
        .text("Hello from synthput");

    // Dry run first: print what would be injected
    let mut dry = RecordingSink::new();
    if let Err(e) = submit(&mut dry, builder.clone()) {
        eprintln!("dry run failed: {e}");
        return;
    }
    for record in dry.records() {
        match record {
            InputRecord::Keyboard(k) => println!(
                "(Keyboard) key={} scan=0x{:04x} flags={:?}",
                k.key, k.scan, k.flags
            ),
            InputRecord::Mouse(m) => println!(
                "(Mouse) dx={} dy={} data={} flags={:?}",
                m.dx, m.dy, m.mouse_data, m.flags
            ),
        }
    }

    if std::env::args().any(|a| a == "--send") {
        let mut sink = system_sink();
        match submit(&mut sink, builder) {
            Ok(batch) => println!("sent {} record(s) via {}", batch.len(), sink.name()),
            Err(e) => eprintln!("send failed: {e}"),
        }
    }
}
