use std::sync::Arc;

use salvo::Router;

use kunai_core::config::Settings;
use kunai_db::store::DavStore;

use crate::config::ConfigHandler;
use crate::store_handler::StoreHandler;

pub mod api;

/// ## Summary
/// Builds the full router: configuration and store hoops around the API routes.
#[must_use]
pub fn router(settings: Settings, store: Arc<dyn DavStore>) -> Router {
    Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler { settings })
        .push(api::routes())
}
