use std::net::TcpListener;

use env_logger::Env;
use probe::{configuration::get_configuration, services::Vault, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let vault = Vault::new(
        configuration.vault.api_url,
        configuration.vault.service_key,
    );

    run(listener, vault)?.await
}
