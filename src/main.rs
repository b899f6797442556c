use clap::Parser;
use daylio_import::application::{
    activity_updates, mood_updates, CreateActivityTagsService, SyncActivitiesService,
    SyncMoodsService, MOOD_ATTRIBUTE,
};
use daylio_import::cli::{format_activity_list, format_update_preview, Action, Cli};
use daylio_import::error::Result;
use daylio_import::infrastructure::{
    import_daylio_csv, Config, ExistClient, HttpTransport, Secrets,
};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let export = import_daylio_csv(&cli.file_path, &config)?;

    match cli.action() {
        Some(Action::SyncMoods) => {
            if cli.dry_run {
                print!("{}", format_update_preview(&mood_updates(&export.entries)));
            } else {
                let service = SyncMoodsService::new(exist_client(&cli.secrets)?);
                let sent = service.execute(&export.entries)?;
                info!(updates = sent, "Mood sync finished");
            }
        }
        Some(Action::SyncActivities) => {
            if cli.dry_run {
                print!("{}", format_update_preview(&activity_updates(&export.entries)));
            } else {
                let service = SyncActivitiesService::new(exist_client(&cli.secrets)?);
                let sent = service.execute(&export.entries)?;
                info!(updates = sent, "Activity sync finished");
            }
        }
        Some(Action::CreateActivityTags) => {
            if cli.dry_run {
                print!("{}", format_activity_list(&export.activities));
            } else {
                let service = CreateActivityTagsService::new(exist_client(&cli.secrets)?);
                let created = service.execute(&export.activities)?;
                info!(attributes = created, "Activity tag creation finished");
            }
        }
        Some(Action::AcquireMood) => {
            if cli.dry_run {
                println!("Would acquire attribute template: {}", MOOD_ATTRIBUTE);
            } else {
                SyncMoodsService::new(exist_client(&cli.secrets)?).acquire()?;
            }
        }
        None => {
            info!(
                entries = export.entries.len(),
                activities = export.activities.len(),
                "Imported entries; no sync action selected"
            );
        }
    }

    Ok(())
}

fn exist_client(secrets_path: &Path) -> Result<ExistClient<HttpTransport>> {
    let secrets = Secrets::load(secrets_path)?;
    let transport = HttpTransport::from_env()?;
    Ok(ExistClient::new(transport, secrets.developer_access_token))
}
