//! The application's routes.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `GET` | `/` | empty form |
//! | `POST` | `/` | submit, re-render the form |
//! | `POST` | `/api/address` | submit, answer with the JSON [`ActionResponse`] |
//! | `GET` | `/healthz`, `/readyz` | [`health`](crate::health) probes |

use std::sync::Arc;

use tracing::{error, warn};

use crate::action::{ActionResponse, AddressStore, SubmitAddress};
use crate::address::FormData;
use crate::health;
use crate::page;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// Builds the router around `action`.
pub fn app<S: AddressStore>(action: SubmitAddress<S>) -> Router {
    let action = Arc::new(action);
    let form_action = Arc::clone(&action);

    Router::new()
        .get("/", show_form)
        .post("/", move |req: Request| {
            let action = Arc::clone(&form_action);
            async move { submit_form(&action, req).await }
        })
        .post("/api/address", move |req: Request| {
            let action = Arc::clone(&action);
            async move { submit_json(&action, req).await }
        })
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

async fn show_form(_req: Request) -> Response {
    Response::html(page::render(&ActionResponse::initial()))
}

async fn submit_form<S: AddressStore>(action: &SubmitAddress<S>, req: Request) -> Response {
    let (status, state) = submit(action, &req).await;
    Response::builder().status(status).html(page::render(&state))
}

async fn submit_json<S: AddressStore>(action: &SubmitAddress<S>, req: Request) -> Response {
    let (status, state) = submit(action, &req).await;
    match serde_json::to_vec(&state) {
        Ok(body) => Response::builder().status(status).json(body),
        Err(e) => {
            error!("failed to serialise action response: {e}");
            Response::status(Status::InternalServerError)
        }
    }
}

/// Runs the action on the request's form body and picks the status code
/// for the outcome.
async fn submit<S: AddressStore>(action: &SubmitAddress<S>, req: &Request) -> (Status, ActionResponse) {
    let form = match FormData::from_request(req) {
        Ok(form) => form,
        Err(e) => {
            warn!(path = req.path(), "rejected submission: {e}");
            return (Status::UnsupportedMediaType, ActionResponse::unexpected());
        }
    };

    let state = action.submit(None, form).await;
    let status = if state.success {
        Status::Ok
    } else if state.is_invalid() {
        Status::UnprocessableContent
    } else {
        Status::InternalServerError
    };
    (status, state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use http::StatusCode;
    use http::header::CONTENT_TYPE;

    use super::*;
    use crate::method::Method;
    use crate::request::tests::request;
    use crate::router::Route;

    const FORM: &str = "application/x-www-form-urlencoded";
    const VALID: &str =
        "streetAddress=123+Main+St&apartment=&city=New+York&state=NY&zipCode=10001&country=United+States";

    async fn call(method: Method, path: &str, content_type: Option<&str>, body: &str) -> Response {
        let router = app(SubmitAddress::new(Duration::ZERO));
        match router.lookup(method, path) {
            Route::Found(handler) => handler.call(request(method, path, content_type, body)).await,
            _ => panic!("no route for {method} {path}"),
        }
    }

    fn body(res: &Response) -> &str {
        std::str::from_utf8(res.body()).unwrap()
    }

    #[tokio::test]
    async fn get_renders_the_form() {
        let res = call(Method::Get, "/", None, "").await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(body(&res).contains("<form id=\"address-form\""));
    }

    #[tokio::test]
    async fn valid_post_renders_success_banner() {
        let res = call(Method::Post, "/", Some(FORM), VALID).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert!(body(&res).contains("Address saved successfully!"));
    }

    #[tokio::test]
    async fn invalid_post_is_unprocessable_and_keeps_values() {
        let res = call(Method::Post, "/", Some(FORM), "streetAddress=9+Elm&zipCode=12").await;
        assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body(&res).contains("value=\"9 Elm\""));
        assert!(body(&res).contains("id=\"country-error\""));
    }

    #[tokio::test]
    async fn json_endpoint_returns_action_response() {
        let res = call(Method::Post, "/api/address", Some(FORM), VALID).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
        let state: ActionResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(state, ActionResponse::saved());
    }

    #[tokio::test]
    async fn json_endpoint_reports_field_errors() {
        let res = call(Method::Post, "/api/address", Some(FORM), "state=&zipCode=1234").await;
        assert_eq!(res.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(json["errors"]["zipCode"], "ZIP code must be at least 5 characters");
        assert_eq!(json["errors"]["state"], "State is required");
        assert_eq!(json["inputs"], serde_json::json!({ "state": "", "zipCode": "1234" }));
    }

    #[tokio::test]
    async fn wrong_content_type_is_a_generic_failure() {
        let res = call(Method::Post, "/api/address", Some("application/json"), "{}").await;
        assert_eq!(res.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let state: ActionResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(state, ActionResponse::unexpected());
    }

    #[tokio::test]
    async fn health_probes_answer() {
        assert_eq!(call(Method::Get, "/healthz", None, "").await.body(), b"ok");
        assert_eq!(call(Method::Get, "/readyz", None, "").await.body(), b"ready");
    }
}
