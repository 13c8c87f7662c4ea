use std::future::Future;

use tracing::{debug, instrument};

use crate::{
    config::RoutingClientParams,
    error::RoutingError,
    model::route::Routes,
    request::{
        builder::{CalculateRouteRequest, build_calculate_route_request},
        params::CalculateRouteParams,
    },
    response::{
        error::{DefaultResponseErrorParser, ResponseErrorParser},
        parser::parse_calculate_route_response,
        types::ApiCalculateRouteResponse,
    },
    validation::{CalculateRouteSchema, validate},
};

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an assembled request and hands back the raw response.
pub trait RouteTransport {
    fn send(
        &self,
        request: &CalculateRouteRequest,
    ) -> impl Future<Output = Result<TransportResponse, RoutingError>> + Send;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTransport for ReqwestTransport {
    async fn send(&self, request: &CalculateRouteRequest) -> Result<TransportResponse, RoutingError> {
        let mut builder = self.client.request(request.method.clone(), request.url()?);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

/// Lets callers see the exact wire exchange of a call.
pub trait CallObserver {
    fn on_request(&self, _request: &CalculateRouteRequest) {}

    fn on_response(&self, _response: &TransportResponse) {}
}

impl CallObserver for () {}

pub struct OrbisRoutingClient<T = ReqwestTransport, E = DefaultResponseErrorParser> {
    params: RoutingClientParams,
    transport: T,
    error_parser: E,
}

impl OrbisRoutingClient {
    pub fn new(params: RoutingClientParams) -> Self {
        Self::with_transport(params, ReqwestTransport::new())
    }

    pub fn from_env() -> Result<Self, RoutingError> {
        Ok(Self::new(RoutingClientParams::from_env()?))
    }
}

impl<T: RouteTransport> OrbisRoutingClient<T> {
    pub fn with_transport(params: RoutingClientParams, transport: T) -> Self {
        Self {
            params,
            transport,
            error_parser: DefaultResponseErrorParser,
        }
    }
}

impl<T, E> OrbisRoutingClient<T, E>
where
    T: RouteTransport,
    E: ResponseErrorParser,
{
    pub fn with_error_parser<P: ResponseErrorParser>(self, error_parser: P) -> OrbisRoutingClient<T, P> {
        OrbisRoutingClient {
            params: self.params,
            transport: self.transport,
            error_parser,
        }
    }

    pub fn params(&self) -> &RoutingClientParams {
        &self.params
    }

    /// Validates `params` and assembles the wire request without sending it.
    pub fn build_request(
        &self,
        params: &CalculateRouteParams,
    ) -> Result<CalculateRouteRequest, RoutingError> {
        let params = validate(params, &CalculateRouteSchema)?;
        Ok(build_calculate_route_request(params, &self.params))
    }

    pub async fn calculate_route(&self, params: &CalculateRouteParams) -> Result<Routes, RoutingError> {
        self.calculate_route_observed(params, &()).await
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn calculate_route_observed(
        &self,
        params: &CalculateRouteParams,
        observer: &impl CallObserver,
    ) -> Result<Routes, RoutingError> {
        let request = self.build_request(params)?;
        observer.on_request(&request);

        let response = self.transport.send(&request).await?;
        observer.on_response(&response);

        if !response.is_success() {
            debug!(status = response.status, "Calculate route request failed");
            return Err(self.error_parser.parse_error(response.status, &response.body));
        }

        let api_response: ApiCalculateRouteResponse = serde_json::from_str(&response.body)?;

        Ok(parse_calculate_route_response(&api_response, params))
    }
}
