use clap::Args;
use uuid::Uuid;
use yori_app::domain::products::{
    PgProductsService, ProductsService, ProductsServiceError, records::ProductUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product UUID to soft-delete
    #[arg(long)]
    product_uuid: Uuid,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    match service
        .delete_product(ProductUuid::from_uuid(args.product_uuid))
        .await
    {
        Ok(()) => println!("deleted product {}", args.product_uuid),
        Err(ProductsServiceError::NotFound) => {
            println!("product {} was not live", args.product_uuid);
        }
        Err(error) => return Err(format!("failed to delete product: {error}")),
    }

    Ok(())
}
