mod app;

use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = app::run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
