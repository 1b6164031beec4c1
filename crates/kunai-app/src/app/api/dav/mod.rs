// Method handlers behind the gate. Only OPTIONS is answered in full; every
// other method goes through the permission and lock checks and then the
// fallback.

use salvo::Router;

pub mod method;
pub mod respond;

#[must_use]
pub fn routes() -> Router {
    Router::with_path("{**rest}")
        .options(method::options::options)
        .goal(method::fallback::fallback)
}
