use synthput::{system_sink, Config, Script, Simulator, VirtualKeyState};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: run_script <script.toml|script.json> [config.toml]");
        std::process::exit(2);
    };

    let script = match Script::load(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let config = match args.next() {
        Some(cfg) => Config::load(&cfg).unwrap_or_else(|e| {
            eprintln!("failed to load {cfg}: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    let mut sim = Simulator::with_config(system_sink(), VirtualKeyState::new(), config);
    match sim.run_script(&script) {
        Ok(batch) => println!("`{}`: sent {} record(s)", script.name, batch.len()),
        Err(e) => eprintln!("`{}` failed: {e}", script.name),
    }
}
