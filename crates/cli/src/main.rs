use anyhow::Result;
use clap::Parser;
use fedsaml_cli::{run_screen, Cli, Config, ScreenExit, TerminalNavigator, TerminalNotifier};
use fedsaml_client::AdminClient;
use fedsaml_core::NewAppController;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they stay out of the form on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.print_config {
        print!("{}", Config::example()?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    tracing::info!("fedsaml starting...");
    tracing::info!("Admin API: {}", config.api.base_url);
    tracing::info!("Locale: {}", config.i18n.locale);

    let client = AdminClient::new_with_options(config.api.client_options())?;
    let navigator = TerminalNavigator::default();
    let controller = NewAppController::new(
        client.clone(),
        TerminalNotifier::stderr(),
        navigator.clone(),
        config.i18n.catalog(),
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match run_screen(&controller, &client, &mut input, &mut output).await? {
        ScreenExit::Created(app) => {
            let target = navigator
                .current()
                .map_or_else(|| fedsaml_core::edit_app_path(&app.id), |cmd| cmd.path().to_string());
            println!("{}{}", client.base_url(), target);
            Ok(())
        }
        ScreenExit::LicenseRequired => {
            anyhow::bail!("License check did not pass");
        }
        ScreenExit::Closed => {
            tracing::info!("Input closed, no app created");
            Ok(())
        }
    }
}
