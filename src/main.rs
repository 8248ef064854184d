use std::path::Path;
use std::process::exit;

use clap::{crate_version, App, Arg};
use tracing::error;
use tracing_subscriber::EnvFilter;

use tintero::build::build_site;
use tintero::config::Config;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = App::new("tintero")
        .version(crate_version!())
        .about("Builds the blog: article pages, author pages, archive, index, and feed")
        .arg(
            Arg::with_name("root")
                .help("Site root (or any directory below it); defaults to the current directory")
                .index(1),
        )
        .get_matches();

    let root = matches.value_of("root").unwrap_or(".");
    let config = match Config::from_directory(Path::new(root)) {
        Ok(config) => config,
        Err(e) => {
            error!("loading configuration: {}", e);
            exit(1);
        }
    };

    if let Err(e) = build_site(&config) {
        error!("build failed: {}", e);
        exit(1);
    }
}
