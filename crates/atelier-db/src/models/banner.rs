//! Site banner entity model.

use atelier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `banners` table. One banner per `banner_type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Banner {
    pub id: DbId,
    pub banner_type: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BannerSummary {
    pub id: DbId,
    pub banner_type: String,
    pub image: String,
}

impl From<Banner> for BannerSummary {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id,
            banner_type: banner.banner_type,
            image: banner.image,
        }
    }
}
