use anyhow::Result;
use clap::{App as Cli, Arg};
use posts_tui::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .value_name("BASE_URL")
                .help("Base URL of the posts API")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("page-size")
                .long("page-size")
                .value_name("ROWS")
                .help("Rows per page")
                .possible_values(&["10", "20", "25", "30"])
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(url) = matches.value_of("url") {
        config.base_url = url.to_string();
    }
    if let Some(page_size) = matches.value_of("page-size") {
        config.set_page_size_arg(page_size)?;
    }

    App::start(config).await
}
