//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AdService, AuthService, CounterService, DeliveryService, ImageService, LocationService,
};
use crate::domain::size_catalog::SizeCatalog;
use crate::infrastructure::persistence::{
    PgAdRepository, PgImageRepository, PgLocationRepository, PgTokenRepository,
};

pub type PgDeliveryService = DeliveryService<PgLocationRepository, PgAdRepository, PgImageRepository>;

/// Built once at startup; every field is immutable or internally synchronized.
#[derive(Clone)]
pub struct AppState {
    pub delivery_service: Arc<PgDeliveryService>,
    pub counter_service: Arc<CounterService<PgAdRepository>>,
    pub ad_service: Arc<AdService<PgAdRepository>>,
    pub location_service: Arc<LocationService<PgLocationRepository>>,
    pub image_service: Arc<ImageService<PgImageRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    /// Enabled sizes as loaded at startup.
    pub catalog: Arc<SizeCatalog>,
}
