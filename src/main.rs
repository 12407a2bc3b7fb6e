mod chatdb;
mod cli;
mod commands;
mod config;
mod env_loader;
mod logging;
mod spotify;
mod sync;

fn main() {
    env_loader::load_dotenv();

    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
