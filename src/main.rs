use clap::Parser;
use kconf_cli::cli::errors::print_error;
use kconf_cli::cli::tracing_init::init_tracing;
use kconf_cli::cli::{commands, Cli};
use kconf_cli::client::KongClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut client = KongClient::stdout(cli.endpoint(), cli.options());
    if let Err(e) = commands::run(&mut client, cli.command).await {
        print_error(&e);
        std::process::exit(1);
    }
}
