//! CLI administration tool for item-service.
//!
//! Mints and inspects bearer tokens and checks the configured item store
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a write-scoped token valid for 24 hours
//! cargo run --bin item-admin -- token issue --subject ci --scope write --ttl-hours 24
//!
//! # Verify a token and check it against a scope
//! cargo run --bin item-admin -- token verify <token> --scope write
//!
//! # Check store connectivity / count items
//! cargo run --bin item-admin -- store check
//! cargo run --bin item-admin -- store stats
//! ```
//!
//! # Environment Variables
//!
//! - `TOKEN_SIGNING_SECRET` (required): must match the server's secret
//! - `STORE_BACKEND` and connection settings for `store` commands
//!   (see [`item_service::config`])

use item_service::config;
use item_service::domain::authorizer::{AuthDecision, Authorizer, Claims, DenyReason};
use item_service::infrastructure::auth::HmacTokenAuthorizer;
use item_service::server::connect_store;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing item-service.
#[derive(Parser)]
#[command(name = "item-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Issue and inspect bearer tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Item store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a new signed token
    Issue {
        /// Subject the token is issued to (e.g., "ci-pipeline")
        #[arg(short = 'u', long)]
        subject: Option<String>,

        /// Granted scope; repeat for several
        #[arg(short, long = "scope", default_value = "write")]
        scopes: Vec<String>,

        /// Lifetime in hours; omit for a non-expiring token
        #[arg(short, long)]
        ttl_hours: Option<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Verify a token and show its claims
    Verify {
        token: String,

        /// Also check whether the token grants this scope
        #[arg(short, long)]
        scope: Option<String>,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,

    /// Show item count
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action).await?,
        Commands::Store { action } => handle_store_action(action).await?,
    }

    Ok(())
}

fn authorizer_from_env() -> Result<HmacTokenAuthorizer> {
    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
    }
    Ok(HmacTokenAuthorizer::new(secret))
}

/// Dispatches token commands.
async fn handle_token_action(action: TokenAction) -> Result<()> {
    let authorizer = authorizer_from_env()?;

    match action {
        TokenAction::Issue {
            subject,
            scopes,
            ttl_hours,
            yes,
        } => issue_token(&authorizer, subject, scopes, ttl_hours, yes)?,
        TokenAction::Verify { token, scope } => verify_token(&authorizer, &token, scope).await?,
    }

    Ok(())
}

/// Issues a token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the subject (or use provided)
/// 2. Build claims with a random `jti` and optional expiry
/// 3. Show claims and confirm (unless `--yes`)
/// 4. Sign and print the token with usage instructions
fn issue_token(
    authorizer: &HmacTokenAuthorizer,
    subject: Option<String>,
    scopes: Vec<String>,
    ttl_hours: Option<i64>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Issue Bearer Token".bright_blue().bold());
    println!();

    let sub = match subject {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Subject")
            .with_initial_text("ci-pipeline")
            .interact_text()?,
    };

    let claims = Claims {
        sub,
        scope: scopes.join(" "),
        exp: expiry_from_ttl(ttl_hours, Utc::now())?,
        jti: Some(generate_jti()),
    };

    print_claims(&claims);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let token = authorizer.issue(&claims)?;

    println!();
    println!("{}", "Token issued:".green().bold());
    println!("  {}", token.bright_yellow());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X POST -H \"Authorization: Bearer {}\" -d '{{\"itemId\":\"abc123\"}}' http://localhost:3000/items",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Converts a lifetime in hours into an absolute `exp` timestamp.
///
/// `None` means the token never expires.
fn expiry_from_ttl(ttl_hours: Option<i64>, now: DateTime<Utc>) -> Result<Option<i64>> {
    let Some(hours) = ttl_hours else {
        return Ok(None);
    };

    if hours <= 0 {
        anyhow::bail!("--ttl-hours must be positive, got {}", hours);
    }

    let exp = Duration::try_hours(hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .with_context(|| format!("--ttl-hours {} is out of range", hours))?;

    Ok(Some(exp.timestamp()))
}

/// Verifies a token and optionally evaluates it against a scope.
async fn verify_token(
    authorizer: &HmacTokenAuthorizer,
    token: &str,
    scope: Option<String>,
) -> Result<()> {
    println!("{}", "Verify Bearer Token".bright_blue().bold());
    println!();

    match authorizer.verify(token) {
        Ok(claims) => {
            println!("{}", "Signature valid".green().bold());
            print_claims(&claims);
        }
        Err(reason) => {
            println!("{}", describe_denial(&reason).red().bold());
            return Ok(());
        }
    }

    if let Some(scope) = scope {
        match authorizer.authorize(token, &scope).await {
            AuthDecision::Allow(_) => {
                println!("  Scope {}: {}", scope.cyan(), "GRANTED".green().bold())
            }
            AuthDecision::Deny(reason) => println!(
                "  Scope {}: {} ({})",
                scope.cyan(),
                "DENIED".red().bold(),
                describe_denial(&reason)
            ),
        }
        println!();
    }

    Ok(())
}

fn print_claims(claims: &Claims) {
    println!("{}", "Claims:".bright_white().bold());
    println!("  Subject: {}", claims.sub.cyan());
    println!("  Scope:   {}", claims.scope.cyan());
    match claims.exp.and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0)) {
        Some(exp) => println!(
            "  Expires: {}",
            exp.format("%Y-%m-%d %H:%M UTC").to_string().bright_black()
        ),
        None => println!("  Expires: {}", "never".bright_black()),
    }
    if let Some(ref jti) = claims.jti {
        println!("  ID:      {}", jti.bright_black());
    }
    println!();
}

fn describe_denial(reason: &DenyReason) -> String {
    match reason {
        DenyReason::InvalidCredential => "Invalid token".to_string(),
        DenyReason::Expired => "Token has expired".to_string(),
        DenyReason::MissingScope { required } => format!("Scope '{}' not granted", required),
    }
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction) -> Result<()> {
    let config = config::load_from_env()?;

    println!(
        "{}",
        format!("Connecting to {} store...", config.store_backend).bright_blue()
    );
    let store = connect_store(&config).await?;

    match action {
        StoreAction::Check => {
            store
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Store check failed: {}", e))?;

            println!("{}", "Store connection OK".green().bold());
        }
        StoreAction::Stats => {
            let items = store
                .scan()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to scan items: {}", e))?;

            println!();
            println!("  Table: {}", config.table_name.cyan());
            println!(
                "  Items: {}",
                items.len().to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Generates a random token identifier.
///
/// # Format
///
/// - Length: 16 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_jti() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const JTI_LEN: usize = 16;

    let mut rng = rand::rng();

    (0..JTI_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_from_ttl() {
        let now = Utc::now();

        let exp = expiry_from_ttl(Some(24), now).unwrap().unwrap();

        assert_eq!(exp, (now + Duration::hours(24)).timestamp());
    }

    #[test]
    fn test_expiry_without_ttl_never_expires() {
        assert_eq!(expiry_from_ttl(None, Utc::now()).unwrap(), None);
    }

    #[test]
    fn test_expiry_rejects_non_positive_ttl() {
        assert!(expiry_from_ttl(Some(0), Utc::now()).is_err());
        assert!(expiry_from_ttl(Some(-5), Utc::now()).is_err());
    }

    #[test]
    fn test_expiry_rejects_out_of_range_ttl() {
        let result = expiry_from_ttl(Some(i64::MAX), Utc::now());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("out of range"));
    }

    #[test]
    fn test_generate_jti() {
        let jti = generate_jti();

        assert_eq!(jti.len(), 16);
        assert!(jti.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
