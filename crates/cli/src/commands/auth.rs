//! Session management commands.

use clap::Subcommand;
use secrecy::SecretString;

use society_marketplace::config::MarketplaceConfig;
use society_marketplace::services::auth::AuthService;
use society_marketplace::storage::LocalStore;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password (accepted, not verified - demo auth)
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password (accepted, not stored - demo auth)
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Clear the session
    Logout,
    /// Show the logged-in user
    Whoami,
}

pub async fn run(
    store: &LocalStore,
    config: &MarketplaceConfig,
    action: AuthAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = AuthService::new(store, config.simulated_latency);
    auth.initialize();

    match action {
        AuthAction::Login { email, password } => {
            let user = auth.login(&email, SecretString::from(password)).await?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }
        AuthAction::Signup {
            email,
            password,
            name,
        } => {
            let user = auth.signup(&email, SecretString::from(password), &name).await?;
            println!("Welcome, {}! You are now logged in.", user.name);
        }
        AuthAction::Logout => {
            auth.logout();
            println!("Logged out.");
        }
        AuthAction::Whoami => match auth.current_user() {
            Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
            None => println!("Not logged in."),
        },
    }
    Ok(())
}
