use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use keygate_adapters::config::AllowedOrigins;
use keygate_adapters::telemetry::{make_span_with_request_id, on_request, on_response};
use keygate_axum::{
    routes::{get_profile, login, refresh, register, update_profile},
    state::AuthState,
};
use keygate_core::{CredentialStore, EventPublisher, SecretHasher, TokenIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// The assembled identity service: all auth routes over one shared state.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Wire the service from its four port implementations.
    ///
    /// Adapters implement `Clone` (internally `Arc`-backed where they hold
    /// state), so one state value serves every route.
    pub fn new<C, H, T, P>(
        credential_store: C,
        secret_hasher: H,
        token_issuer: T,
        event_publisher: P,
    ) -> Self
    where
        C: CredentialStore + Clone + 'static,
        H: SecretHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
        P: EventPublisher + Clone + 'static,
    {
        let state = AuthState {
            credential_store,
            secret_hasher,
            token_issuer,
            event_publisher,
        };

        let router = Router::new()
            .route("/register", post(register::<C, H, T, P>))
            .route("/login", post(login::<C, H, T, P>))
            .route("/refresh", post(refresh::<C, H, T, P>))
            .route(
                "/profile",
                get(get_profile::<C, H, T, P>).put(update_profile::<C, H, T, P>),
            )
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be nested under another application.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the identity service as a standalone server.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Identity service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
