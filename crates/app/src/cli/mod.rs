use clap::{Args, Parser, Subcommand};
use yori_app::database::{self, Db};

mod db;
mod order;
mod product;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "yori-app", about = "Yori storefront admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Token(token::TokenCommand),
    Product(product::ProductCommand),
    Order(order::OrderCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Product(command) => product::run(command).await,
            Commands::Order(command) => order::run(command).await,
        }
    }
}

/// Connection flags shared by every command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url, 2)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn product_delete_takes_a_product_uuid() -> TestResult {
        let cli = Cli::try_parse_from([
            "yori-app",
            "product",
            "delete",
            "--database-url",
            "postgres://localhost/yori",
            "--product-uuid",
            "0190f6a4-0c4e-7d2a-9b1e-3f5c8a2d4e61",
        ])?;

        assert!(matches!(cli.command, Commands::Product(_)), "{cli:?}");

        let missing = Cli::try_parse_from([
            "yori-app",
            "product",
            "delete",
            "--database-url",
            "postgres://localhost/yori",
        ]);

        assert!(missing.is_err(), "product uuid is required");

        Ok(())
    }
}
