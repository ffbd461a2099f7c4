use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::request_id::RequestIdValue;

/// Middleware that logs failed requests with their request ID
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let request_id = req
            .extensions()
            .get::<RequestIdValue>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) if res.status().is_server_error() => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %path,
                        status = %res.status(),
                        error = ?res.response().error(),
                        "Request failed"
                    );
                }
                Ok(res) if res.status().is_client_error() => {
                    tracing::warn!(
                        request_id = %request_id,
                        path = %path,
                        status = %res.status(),
                        error = ?res.response().error(),
                        "Request rejected"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %path,
                        "Request error: {:?}",
                        err
                    );
                }
                _ => {}
            }

            result
        })
    }
}
