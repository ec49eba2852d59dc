//! Per-request correlation: every request runs with a fresh [`TraceId`]
//! active, inside an `http_request` span, and the identifier is echoed in
//! the `trace-id` response header.

use std::rc::Rc;

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, Span, debug, error, info_span};

use crate::domain::TraceId;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Middleware factory; wrap the app with it to correlate requests.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: Rc<S>,
}

fn request_span(req: &ServiceRequest, trace_id: TraceId) -> Span {
    info_span!(
        "http_request",
        %trace_id,
        method = %req.method(),
        path = %req.path(),
    )
}

fn stamp_trace_header<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => error!(error = %err, "trace identifier is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let span = request_span(&req, trace_id);
        let service = Rc::clone(&self.service);

        let handled = async move {
            let mut res = service.call(req).await?;
            debug!(status = res.status().as_u16(), "request completed");
            stamp_trace_header(&mut res, trace_id);
            Ok(res)
        };

        Box::pin(trace_id.instrument(handled.instrument(span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn call_traced<F, Fut, Res>(handler: F) -> ServiceResponse
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app =
            test::init_service(App::new().wrap(Trace).route("/", web::get().to(handler))).await;
        let req = test::TestRequest::get().uri("/").to_request();
        test::call_service(&app, req).await
    }

    fn header_trace_id(res: &ServiceResponse) -> TraceId {
        res.headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("header is ascii")
            .parse()
            .expect("header holds a UUID")
    }

    #[actix_web::test]
    async fn adds_trace_id_header() {
        let res = call_traced(|| async { HttpResponse::Ok().finish() }).await;
        let _ = header_trace_id(&res);
    }

    #[actix_web::test]
    async fn exposes_trace_id_in_handler() {
        let res = call_traced(|| async move {
            let id = TraceId::current().expect("trace id in scope");
            HttpResponse::Ok().body(id.to_string())
        })
        .await;
        let header = header_trace_id(&res);
        let body = test::read_body(res).await;
        assert_eq!(body, header.to_string().as_bytes());
    }

    #[actix_web::test]
    async fn error_responses_carry_trace_header() {
        use crate::domain::Error as DomainError;
        use crate::inbound::http::ApiResult;

        let res = call_traced(|| async move {
            ApiResult::<HttpResponse>::Err(DomainError::conflict("taken"))
        })
        .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::CONFLICT);
        let _ = header_trace_id(&res);
    }

    #[actix_web::test]
    async fn each_request_gets_a_fresh_identifier() {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_ne!(header_trace_id(&first), header_trace_id(&second));
    }
}
