use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use kunai_core::error::CoreError;
use kunai_db::store::DavStore;

/// Places the shared store in every request's depot.
pub struct StoreHandler {
    pub store: Arc<dyn DavStore>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn DavStore>> {
    depot
        .obtain::<Arc<dyn DavStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Store not found in depot").into())
}
