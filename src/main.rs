use modelforge::config::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::load();
    match &config.service_account {
        Some(account) => log::info!(
            "Store credentials loaded for project '{}'",
            account.project_id
        ),
        None => log::warn!("Running without store credentials"),
    }

    println!("{}", serde_json::to_string_pretty(&config.snapshot())?);
    Ok(())
}
