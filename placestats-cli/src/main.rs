//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = placestats_cli::run() {
        eprintln!("placestats: {err}");
        std::process::exit(1);
    }
}
