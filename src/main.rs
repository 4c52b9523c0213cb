use contact_book::prelude::run_app;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_app() {
        log::error!("{e:?}");
        eprintln!("Error: {e}");
        exit(1);
    }
}
