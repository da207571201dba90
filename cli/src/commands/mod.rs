use clap::Subcommand;
use tripwire_app::User;

pub mod product;
pub mod profile;
pub mod user;

#[derive(Subcommand)]
pub enum Commands {
    /// Look a user up by name
    GetUser(user::GetUserCommand),

    /// Change a user's email address
    UpdateEmail(user::UpdateEmailCommand),

    /// Delete a user by ID
    DeleteUser(user::DeleteUserCommand),

    /// Check a candidate password against a seeded user
    CheckPassword(user::CheckPasswordCommand),

    /// Log in with the built-in admin account
    Authenticate(user::AuthenticateCommand),

    /// Render the profile page fragment
    RenderProfile(profile::RenderProfileCommand),

    /// Apply a percentage discount to a price
    Discount(product::DiscountCommand),
}

pub fn parse_user(s: &str) -> Result<User, String> {
    let mut parts = s.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(email), Some(password)) => Ok(User::new(name, email, password)),
        _ => Err(format!("expected NAME:EMAIL:PASSWORD, got {:?}", s)),
    }
}
