//! Authenticated API client.

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use prexcol_core::credentials::Credentials;
use prexcol_core::error::{AuthError, Error};
use prexcol_core::models::UserProfile;
use prexcol_core::tokens::{AccessToken, CredentialPair, RefreshToken};
use prexcol_core::traits::{CredentialStore, NullSink, SessionSink};
use prexcol_core::types::ApiUrl;
use prexcol_core::Result;

use crate::endpoints::{
    FORGOT_PASSWORD, ForgotPasswordRequest, LOGIN, LoginRequest, LoginResponse, MessageResponse,
    REFRESH_TOKEN, REGISTER, RefreshRequest, RefreshResponse, RegisterRequest, RegisterResponse,
    ResetPasswordRequest, reset_password_path,
};
use crate::http::HttpClient;

/// An authenticated client for the PREXCOL API.
///
/// The client attaches the stored access token to every request and
/// transparently recovers from a single expired-access-token rejection:
/// on a 401 it refreshes the token once and resends the original request
/// once. When refresh is impossible or also rejected, it clears the
/// credential store, notifies the session sink, and surfaces
/// [`AuthError::SessionExpired`].
///
/// # Thread Safety
///
/// Clients are cheap to clone (they use internal `Arc`) and safe to share
/// across tasks. Concurrent requests that are rejected together coalesce on
/// a single refresh call and all retry with its result.
///
/// # Cancellation
///
/// Each request is an independently cancellable future: dropping it aborts
/// the in-flight network call, including a refresh or retry it triggered.
/// The refresh gate is released on drop, so cancelling one request never
/// wedges the others. Deadlines beyond the transport's native behavior are
/// the caller's concern (e.g. `tokio::time::timeout` around the call).
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use prexcol_client::ApiClient;
/// use prexcol_core::{ApiUrl, Credentials};
/// use prexcol_store::MemoryStore;
///
/// # async fn example() -> prexcol_core::Result<()> {
/// let api = ApiUrl::new("http://127.0.0.1:8000/api")?;
/// let client = ApiClient::new(api, Arc::new(MemoryStore::new()));
///
/// let user = client
///     .login(&Credentials::new("alice@example.com", "password"))
///     .await?;
/// println!("Logged in as: {}", user.email);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    store: Arc<dyn CredentialStore>,
    sink: Arc<dyn SessionSink>,
    // Single-flight gate: at most one refresh call in flight at a time.
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    /// Create a client with the given credential store and no expiry sink.
    pub fn new(api: ApiUrl, store: Arc<dyn CredentialStore>) -> Self {
        Self::with_sink(api, store, Arc::new(NullSink))
    }

    /// Create a client with an explicit session-expiry sink.
    pub fn with_sink(
        api: ApiUrl,
        store: Arc<dyn CredentialStore>,
        sink: Arc<dyn SessionSink>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: HttpClient::new(api),
                store,
                sink,
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    /// Returns the API root this client talks to.
    pub fn api(&self) -> &ApiUrl {
        self.inner.http.api()
    }

    /// Returns true if a credential pair is currently stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.inner.store.load().await?.is_some())
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate and store the issued credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the backend rejects
    /// the email/password pair, and transport or store errors otherwise.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile> {
        info!("Creating new session");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        let response = self
            .inner
            .http
            .send(Method::POST, LOGIN, None::<&()>, Some(&request), None)
            .await?;

        let login: LoginResponse = match self.inner.http.expect_token_json(response).await {
            Ok(login) => login,
            Err(Error::Http(err)) if err.status == 400 || err.status == 401 => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(err) => return Err(err),
        };

        self.inner
            .store
            .save(&CredentialPair::new(login.access, login.refresh))
            .await?;

        debug!(user = login.user.id, "Session created successfully");
        Ok(login.user)
    }

    /// Discard the stored credential pair.
    ///
    /// An explicit logout does not notify the session sink; the sink is
    /// reserved for expiry the caller did not ask for.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        info!("Discarding session");
        self.inner.store.clear().await
    }

    /// Register a new account.
    ///
    /// Registration does not log the new account in; call [`Self::login`]
    /// afterwards.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        let response = self
            .inner
            .http
            .send(Method::POST, REGISTER, None::<&()>, Some(request), None)
            .await?;

        let registered: RegisterResponse = self.inner.http.expect_json(response).await?;
        Ok(registered.user)
    }

    /// Request a password reset email.
    ///
    /// The backend answers with the same acknowledgement whether or not the
    /// email exists.
    #[instrument(skip(self, email))]
    pub async fn forgot_password(&self, email: &str) -> Result<String> {
        let request = ForgotPasswordRequest { email };
        let response = self
            .inner
            .http
            .send(Method::POST, FORGOT_PASSWORD, None::<&()>, Some(&request), None)
            .await?;

        let ack: MessageResponse = self.inner.http.expect_json(response).await?;
        Ok(ack.message)
    }

    /// Complete a password reset using the emailed uid/token pair.
    #[instrument(skip(self, password))]
    pub async fn reset_password(&self, uid: &str, token: &str, password: &str) -> Result<String> {
        let request = ResetPasswordRequest { password };
        let path = reset_password_path(uid, token);
        let response = self
            .inner
            .http
            .send(Method::POST, &path, None::<&()>, Some(&request), None)
            .await?;

        let ack: MessageResponse = self.inner.http.expect_json(response).await?;
        Ok(ack.message)
    }

    // ========================================================================
    // Request Dispatch
    // ========================================================================

    /// Issue an authenticated GET request and parse the response body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self
            .dispatch(Method::GET, path, None::<&()>, None::<&()>)
            .await?;
        self.inner.http.expect_json(response).await
    }

    /// Issue an authenticated GET request with query parameters.
    pub async fn get_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .dispatch(Method::GET, path, Some(query), None::<&()>)
            .await?;
        self.inner.http.expect_json(response).await
    }

    /// Issue an authenticated POST request and parse the response body.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .dispatch(Method::POST, path, None::<&()>, Some(body))
            .await?;
        self.inner.http.expect_json(response).await
    }

    /// Issue an authenticated PUT request and parse the response body.
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .dispatch(Method::PUT, path, None::<&()>, Some(body))
            .await?;
        self.inner.http.expect_json(response).await
    }

    /// Send a request with the stored access token, refreshing it at most
    /// once when the backend rejects it.
    ///
    /// The sequence per request is: send; on 401, obtain a fresh access
    /// token (through the single-flight gate); resend exactly once. A 401
    /// on the resent request is terminal. The refresh call itself goes
    /// through the raw transport path and is never subject to this
    /// machinery.
    async fn dispatch<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let token = self
            .inner
            .store
            .load()
            .await?
            .map(|pair| pair.access.as_str().to_string());

        let response = self
            .inner
            .http
            .send(method.clone(), path, query, body, token.as_deref())
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(path, "Access token rejected, attempting refresh");
        let fresh = self.refresh_after_reject(token.as_deref()).await?;

        let retry = self
            .inner
            .http
            .send(method, path, query, body, Some(&fresh))
            .await?;

        if retry.status() == StatusCode::UNAUTHORIZED {
            warn!(path, "Request rejected again after refresh");
            self.expire_session().await;
            return Err(AuthError::SessionExpired.into());
        }

        Ok(retry)
    }

    /// Obtain a usable access token after a 401, refreshing at most once.
    ///
    /// `stale` is the token the rejected request carried. Callers that
    /// arrive here while another request holds the gate wait for it; if the
    /// stored token changed while waiting, it is reused without a second
    /// refresh call.
    ///
    /// Every failure path is terminal: the store is cleared, the sink
    /// notified, and [`AuthError::SessionExpired`] returned.
    #[instrument(skip(self, stale))]
    async fn refresh_after_reject(&self, stale: Option<&str>) -> Result<String> {
        let _gate = self.inner.refresh_gate.lock().await;

        let pair = self.inner.store.load().await?;

        if let Some(ref pair) = pair {
            if stale != Some(pair.access.as_str()) {
                debug!("Reusing access token refreshed by a concurrent request");
                return Ok(pair.access.as_str().to_string());
            }
        }

        let Some(refresh) = pair.and_then(|pair| pair.refresh) else {
            debug!("No refresh token available");
            self.expire_session().await;
            return Err(AuthError::SessionExpired.into());
        };

        info!("Refreshing session");
        match self.refresh_call(&refresh).await {
            Ok(access) => {
                debug!("Session refreshed successfully");
                Ok(access)
            }
            Err(err) => {
                warn!(error = %err, "Session refresh failed");
                self.expire_session().await;
                Err(AuthError::SessionExpired.into())
            }
        }
    }

    /// Perform the refresh network call and store the issued tokens.
    ///
    /// Returns the new access token. Any error here is escalated to
    /// terminal handling by the caller; the distinction between failure
    /// causes is logged, never surfaced.
    async fn refresh_call(&self, refresh: &RefreshToken) -> Result<String> {
        let request = RefreshRequest {
            refresh: refresh.as_str(),
        };

        let response = self
            .inner
            .http
            .send(Method::POST, REFRESH_TOKEN, None::<&()>, Some(&request), None)
            .await?;

        let refreshed: RefreshResponse = self.inner.http.expect_token_json(response).await?;

        let access = refreshed.access.clone();
        let pair = CredentialPair {
            access: AccessToken::new(refreshed.access),
            // Keep the stored refresh token when the backend does not rotate it
            refresh: refreshed
                .refresh
                .map(RefreshToken::new)
                .or_else(|| Some(refresh.clone())),
        };
        self.inner.store.save(&pair).await?;

        Ok(access)
    }

    /// Terminal session handling: clear credentials, notify the sink.
    async fn expire_session(&self) {
        if let Err(err) = self.inner.store.clear().await {
            warn!(error = %err, "Failed to clear credential store");
        }
        self.inner.sink.session_expired().await;
    }
}

// Custom Debug impl that hides the injected collaborators
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api", self.inner.http.api())
            .finish_non_exhaustive()
    }
}
