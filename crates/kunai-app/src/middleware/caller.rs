//! Caller identification.
//!
//! Authentication itself happens elsewhere: either the server runs for one
//! configured user, or a trusted proxy names the user in a header. This
//! middleware only turns that name into a `CallerIdentity`. A path with
//! illegal characters is rejected with 400 before the user is looked up.

use std::sync::Arc;

use salvo::Depot;
use tracing::error;

use kunai_core::config::{AuthMethod, Settings};
use kunai_core::error::CoreError;
use kunai_db::store::DavStore;
use kunai_service::request::{CallerIdentity, path};
use kunai_service::response::DavResponse;

use super::depot::depot_keys;
use super::gate::dav_path;
use crate::app::api::dav::respond::write_response;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::store_handler::get_store_from_depot;

/// Resolves the caller and stores it under `depot_keys::CALLER`.
///
/// Illegal paths get 400 without a store lookup. Unknown or inactive users
/// get 401. Missing configuration or store
/// failures get 500.
pub struct CallerMiddleware;

#[salvo::async_trait]
impl salvo::Handler for CallerMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        if let Err(e) = path::sanitize(&dav_path(req)) {
            let response = DavResponse::from(&e);
            response.log_terminal(None, req.uri().path());
            write_response(res, &response);
            ctrl.skip_rest();
            return;
        }

        tracing::trace!("Identifying caller");

        let identified = match username_and_store(req, depot) {
            Ok((username, store)) => lookup(store.as_ref(), &username).await,
            Err(e) => Err(e),
        };

        let caller = match identified {
            Ok(caller) => caller,
            Err(e) => {
                let response = match &e {
                    AppError::Unauthenticated(_) => DavResponse::text(e.status(), "Unauthorized"),
                    _ => {
                        error!(error = ?e, "Failed to identify caller");
                        DavResponse::text(e.status(), "Internal Server Error")
                    }
                };
                response.log_terminal(None, req.uri().path());
                write_response(res, &response);
                ctrl.skip_rest();
                return;
            }
        };

        tracing::debug!(caller = caller.id, name = %caller.name, "Caller identified");
        depot.insert(depot_keys::CALLER, caller);
    }
}

fn username_and_store(
    req: &salvo::Request,
    depot: &Depot,
) -> AppResult<(String, Arc<dyn DavStore>)> {
    let config = get_config_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;

    Ok((username_for(req, &config)?, store))
}

fn username_for(req: &salvo::Request, config: &Settings) -> AppResult<String> {
    match config.auth.method {
        AuthMethod::SingleUser => config
            .auth
            .single_user
            .as_ref()
            .map(|single| single.username.clone())
            .ok_or_else(|| {
                CoreError::InvariantViolation("Single-user mode without a configured username")
                    .into()
            }),
        AuthMethod::Proxy => {
            let header = config
                .auth
                .proxy
                .as_ref()
                .map_or("X-Remote-User", |proxy| proxy.header.as_str());
            req.headers()
                .get(header)
                .and_then(|value| value.to_str().ok())
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .ok_or_else(|| AppError::Unauthenticated(format!("missing {header} header")))
        }
    }
}

async fn lookup(store: &dyn DavStore, username: &str) -> AppResult<CallerIdentity> {
    match store.user_by_username(username).await? {
        Some(user) if user.active => Ok(CallerIdentity::from(&user)),
        Some(_) => Err(AppError::Unauthenticated(format!("{username} is inactive"))),
        None => Err(AppError::Unauthenticated(format!("{username} is unknown"))),
    }
}
