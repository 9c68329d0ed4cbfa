use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        inventory::list_inventory,
        listing::{list_products, list_products_v2, list_products_v3},
        products::{get_product, update_product},
        reviews::list_reviews,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// No timeout layer is installed: a listing keeps running until every
/// lookup it dispatched has settled.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Product routes
        .route("/product/{product_id}", get(get_product).put(update_product))
        .route("/products/{product_id}", get(get_product))
        // Per-product collections
        .route("/reviews/{product_id}", get(list_reviews))
        .route("/products/{product_id}/reviews", get(list_reviews))
        .route("/inventory/{product_id}", get(list_inventory))
        .route("/products/{product_id}/inventory", get(list_inventory))
        // Listings
        .route("/products", get(list_products))
        .route("/products_v2", get(list_products_v2))
        .route("/products_v3", get(list_products_v3))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
