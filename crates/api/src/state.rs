/// Handler state: the pool handed out by the process-wide client provider.
///
/// Cloned per request; `PgPool` is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: transit_db::DbPool,
}
