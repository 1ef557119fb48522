/// Shared state for every identity route: the four ports the use cases
/// draw on. Adapters are cheap to clone (`Arc`-backed or key-material
/// copies), so the state is cloned per request by Axum.
#[derive(Clone)]
pub struct AuthState<C, H, T, P> {
    pub credential_store: C,
    pub secret_hasher: H,
    pub token_issuer: T,
    pub event_publisher: P,
}
