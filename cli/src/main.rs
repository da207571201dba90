use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tripwire_app::config::Settings;
use tripwire_app::db::{self, schema};
use tripwire_app::SqliteCursor;

use commands::{parse_user, product, profile, user, Commands};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder holding the config/ directory
    #[arg(long, default_value = ".")]
    config_dir: String,

    /// Seed a user as NAME:EMAIL:PASSWORD (repeatable)
    #[arg(long = "user", value_parser = parse_user)]
    users: Vec<tripwire_app::User>,

    #[command(subcommand)]
    command: Commands,
}

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new_from_folder(cli.config_dir.clone())?;

    let level = if settings.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let pool = db::connect(settings.default_database()?).await?;
    schema::create_users_table(&pool).await?;
    for seed in &cli.users {
        let id = schema::insert_user(&pool, seed).await?;
        info!("Seeded user {} with id {}", seed.name, id);
    }

    let mut cursor = SqliteCursor::new(pool);

    match cli.command {
        Commands::GetUser(cmd) => user::execute_get_user(cmd, &mut cursor).await,
        Commands::UpdateEmail(cmd) => user::execute_update_email(cmd, &mut cursor).await,
        Commands::DeleteUser(cmd) => user::execute_delete_user(cmd, &mut cursor).await,
        Commands::CheckPassword(cmd) => user::execute_check_password(cmd, &cli.users),
        Commands::Authenticate(cmd) => user::execute_authenticate(cmd),
        Commands::RenderProfile(cmd) => profile::execute(cmd),
        Commands::Discount(cmd) => product::execute(cmd),
    }
}
