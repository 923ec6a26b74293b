use clap::Args;
use yori::money::format_vnd;
use yori_app::domain::products::{
    PgProductsService, ProductsService,
    data::NewProduct,
    records::ProductUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    name: String,

    /// URL slug; must be unique
    #[arg(long)]
    slug: String,

    /// Unit price in dong
    #[arg(long)]
    price: u64,

    #[arg(long, default_value = "")]
    image_url: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    let product = service
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: args.name,
            slug: args.slug,
            image_url: args.image_url,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("slug: {}", product.slug);
    println!("price: {}", format_vnd(product.price));

    Ok(())
}
