use clap::Args;
use yori::orders::{code::OrderCode, status::OrderStatus};
use yori_app::domain::orders::{OrdersService, PgOrdersService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct OrderStatusArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    order_code: String,

    /// pending, processing, shipping, completed or cancelled
    #[arg(long)]
    status: String,
}

pub(crate) async fn run(args: OrderStatusArgs) -> Result<(), String> {
    let status = args
        .status
        .parse::<OrderStatus>()
        .map_err(|error| error.to_string())?;

    let service = PgOrdersService::new(args.database.connect().await?);

    let order = service
        .update_status(&OrderCode::new(args.order_code), status)
        .await
        .map_err(|error| format!("failed to update order status: {error}"))?;

    println!("order_code: {}", order.order_code);
    println!("status: {}", order.status);

    Ok(())
}
