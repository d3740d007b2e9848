mod actions;
mod collection;
mod fs;
mod types;
use actions::action_export;
use anyhow::Result;
use seahorse::App;
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage("lx-postman-export")
        .action(action_export);
    app.run(args);
    Ok(())
}
