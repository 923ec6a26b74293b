use clap::Args;
use yori::validation::is_valid_email;
use yori_app::domain::users::{
    PgUsersService, UsersService,
    data::NewUser,
    records::UserUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Display name
    #[arg(long)]
    full_name: String,

    /// Login email; stored lowercased
    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: Option<String>,

    /// Default delivery address offered at checkout
    #[arg(long)]
    address: Option<String>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.full_name.trim().is_empty() {
        return Err("full-name cannot be empty".to_string());
    }

    if !is_valid_email(args.email.trim()) {
        return Err("email is not valid".to_string());
    }

    let service = PgUsersService::new(args.database.connect().await?);

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            full_name: args.full_name.trim().to_string(),
            email: args.email.trim().to_string(),
            phone: args.phone,
            address: args.address,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("full_name: {}", user.full_name);
    println!("email: {}", user.email);

    Ok(())
}
