use anyhow::{anyhow, Result};
use clap::Args;
use tripwire_app::{views, Cursor, User};

#[derive(Args)]
pub struct GetUserCommand {
    /// Name to look up, passed to the query untouched
    pub name: String,
}

#[derive(Args)]
pub struct UpdateEmailCommand {
    /// User ID, passed to the query untouched
    #[arg(allow_hyphen_values = true)]
    pub id: String,

    /// New email address
    pub email: String,
}

#[derive(Args)]
pub struct DeleteUserCommand {
    /// User ID, passed to the query untouched
    #[arg(allow_hyphen_values = true)]
    pub id: String,
}

#[derive(Args)]
pub struct CheckPasswordCommand {
    /// Name of a user seeded with --user
    pub name: String,

    /// Candidate password
    pub candidate: String,
}

#[derive(Args)]
pub struct AuthenticateCommand {
    pub username: String,
    pub password: String,
}

pub async fn execute_get_user<C: Cursor>(cmd: GetUserCommand, cursor: &mut C) -> Result<()> {
    match views::get_user_by_name(&cmd.name, cursor).await? {
        Some(row) => println!("{}", serde_json::to_string_pretty(&row)?),
        None => println!("null"),
    }

    Ok(())
}

pub async fn execute_update_email<C: Cursor>(
    cmd: UpdateEmailCommand,
    cursor: &mut C,
) -> Result<()> {
    views::update_user_email(&cmd.id, &cmd.email, cursor).await?;
    println!("Updated email for user {}", cmd.id);

    Ok(())
}

pub async fn execute_delete_user<C: Cursor>(cmd: DeleteUserCommand, cursor: &mut C) -> Result<()> {
    views::delete_user(&cmd.id, cursor).await?;
    println!("Deleted user {}", cmd.id);

    Ok(())
}

/// Only the `--user` seeds are searched, the `users` table is not read.
pub fn execute_check_password(cmd: CheckPasswordCommand, users: &[User]) -> Result<()> {
    let user = users
        .iter()
        .find(|u| u.name == cmd.name)
        .ok_or_else(|| anyhow!("No seeded user named {}", cmd.name))?;

    println!("{}", user.check_password(&cmd.candidate));
    Ok(())
}

pub fn execute_authenticate(cmd: AuthenticateCommand) -> Result<()> {
    println!("{}", views::authenticate(&cmd.username, &cmd.password));
    Ok(())
}
