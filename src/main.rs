use dashscope_probe::config::AppConfig;
use dashscope_probe::providers::dashscope::DashScopeClient;
use dashscope_probe::{banner, report, runner};
use reqwest::Client;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    banner::print_banner();

    // A missing .env is fine; the variables may already be in the environment.
    let dotenv = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No .env file loaded: {}", e),
    }

    let result = match AppConfig::from_env() {
        Ok(config) => {
            report::print_parameters(&config.probe);
            banner::print_progress(&config.api_base);

            let client = DashScopeClient::new(Client::new(), config.api_base.clone());
            runner::run_probe(&client, &config.probe).await
        }
        Err(e) => {
            log::error!("Failed to load probe configuration: {}", e);
            runner::failure_result(e, 0)
        }
    };

    report::print_result(&result);
    banner::print_closing(result.outcome);

    ExitCode::from(result.exit_status())
}
