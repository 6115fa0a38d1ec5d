//! Custom Axum extractors

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::Method;
use axum::Form;

use super::error::ApiError;
use crate::views::{ManageRequest, RequestMethod};

/// Method, query string and (for POST) the urlencoded form body
pub struct ManageInput(pub ManageRequest);

impl<S> FromRequest<S> for ManageInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let Query(query) = Query::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let method = method_kind(&parts.method);
        let form = if method == RequestMethod::Post {
            let req = Request::from_parts(parts, body);
            let Form(form) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            form
        } else {
            HashMap::new()
        };

        Ok(Self(ManageRequest {
            method,
            form,
            query,
        }))
    }
}

/// The router only mounts GET (and implied HEAD) and POST
fn method_kind(method: &Method) -> RequestMethod {
    if *method == Method::POST {
        RequestMethod::Post
    } else {
        RequestMethod::Get
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[tokio::test]
    async fn get_reads_query_only() {
        let req = Request::builder()
            .method("GET")
            .uri("/manage?edit=3")
            .body(Body::empty())
            .unwrap();

        let ManageInput(input) = ManageInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.method, RequestMethod::Get);
        assert_eq!(input.query_param("edit"), Some("3"));
        assert!(input.form.is_empty());
    }

    #[tokio::test]
    async fn post_reads_form_and_query() {
        let req = Request::builder()
            .method("POST")
            .uri("/manage?edit=3")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("action=update&id=3&phrase=Hello+there&jokes="))
            .unwrap();

        let ManageInput(input) = ManageInput::from_request(req, &()).await.unwrap();
        assert_eq!(input.method, RequestMethod::Post);
        assert_eq!(input.form_field("action"), Some("update"));
        assert_eq!(input.form_field("phrase"), Some("Hello there"));
        assert_eq!(input.form_field("jokes"), Some(""));
        assert_eq!(input.query_param("edit"), Some("3"));
    }

    #[tokio::test]
    async fn post_without_form_content_type_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/manage")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let result = ManageInput::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::BadRequest { .. })));
    }
}
