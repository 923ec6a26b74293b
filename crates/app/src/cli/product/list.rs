use clap::Args;
use yori::money::format_vnd;
use yori_app::domain::products::{PgProductsService, ProductsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!(
            "{}  {}  {}  {}",
            product.uuid,
            product.slug,
            format_vnd(product.price),
            product.name
        );
    }

    Ok(())
}
