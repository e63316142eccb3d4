use clap::Parser;
use file_manager::role_profiles::ProfileStore;
use tracing_subscriber::EnvFilter;

mod json;
mod menu;
mod store;

fn main() -> anyhow::Result<()> {
    let args = shared::args::Args::parse();

    // Logs go to stderr; stdout stays free for the menu and the terminal
    // handed to the launched shell.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(args.debug)
        .with_line_number(args.debug)
        .with_env_filter(EnvFilter::new(if args.debug { "debug" } else { "info" }))
        .init();

    let profile_store = match args.file {
        Some(path) => ProfileStore::new(path),
        None => ProfileStore::at_default_path()?,
    };

    if args.menu {
        menu::run(&profile_store)?;
    } else {
        store::ingest(
            std::io::stdin().lock(),
            &profile_store,
            args.profile.as_deref(),
        )?;
    }

    Ok(())
}
