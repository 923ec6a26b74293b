//! Routes and API documentation.

use salvo::{
    catcher::Catcher,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{auth, carts, checkout, healthcheck, observability, orders, responses};

/// Every endpoint. State is injected by the caller.
pub(crate) fn routes() -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("cart")
                        .get(carts::get::handler)
                        .post(carts::create::handler)
                        .push(
                            Router::with_path("items/{item_id}")
                                .put(carts::update::handler)
                                .delete(carts::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("checkout")
                        .push(Router::with_path("init").get(checkout::init::handler))
                        .push(
                            Router::with_path("validate-shipping")
                                .post(checkout::validate_shipping::handler),
                        )
                        .push(
                            Router::with_path("payment-info").get(checkout::payment_info::handler),
                        )
                        .push(
                            Router::with_path("place-order").post(checkout::place_order::handler),
                        ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .push(Router::with_path("{order_id}").get(orders::get::handler)),
                ),
        )
}

/// Serve `router`, rendering framework errors as JSON.
pub(crate) fn service(router: Router) -> Service {
    Service::new(router).catcher(Catcher::default().hoop(responses::render_status_error))
}

/// Add the OpenAPI document and Swagger UI for `router`.
pub(crate) fn with_docs(router: Router) -> Router {
    let doc = OpenApi::new("Yori API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
