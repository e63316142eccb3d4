use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The name of the profile to store the piped credentials under
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Open the interactive role menu instead of reading credentials from stdin
    #[arg(short, long, default_value_t = false)]
    pub menu: bool,

    /// Override the role profile store file path
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enables verbose logging to the console
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}
