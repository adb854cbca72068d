//! Product listing DTO.

use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::models::Product;
use crate::service::ProductListing;

/// Response body for `GET /api/products`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsResponse {
    /// Products users can buy with coins.
    pub buy: Vec<Product>,
    /// Products users can sell for coins.
    pub sell: Vec<Product>,
}

impl From<ProductListing> for ProductsResponse {
    fn from(listing: ProductListing) -> Self {
        Self {
            buy: listing.buy,
            sell: listing.sell,
        }
    }
}
