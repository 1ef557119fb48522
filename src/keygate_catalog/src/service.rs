use axum::{Router, routing::get};
use keygate_adapters::telemetry::{make_span_with_request_id, on_request, on_response};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::ports::ProductStore;
use crate::routes::{get_categories, get_product, list_products};

/// The assembled catalog service.
pub struct CatalogService {
    router: Router,
}

impl CatalogService {
    pub fn new<S>(product_store: S) -> Self
    where
        S: ProductStore + Clone + 'static,
    {
        let router = Router::new()
            .route("/products", get(list_products::<S>))
            .route("/products/categories", get(get_categories::<S>))
            .route("/products/{product_id}", get(get_product::<S>))
            .with_state(product_store);

        Self { router }
    }

    pub fn into_router(self) -> Router {
        self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
    }

    /// Run the catalog service as a standalone server.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Catalog service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
