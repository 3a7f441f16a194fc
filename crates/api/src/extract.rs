//! Request field extraction for the movie handlers.

use std::convert::Infallible;

use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

type Pairs = Vec<(String, String)>;

/// Named text fields gathered from the request body and the query string.
///
/// Body fields come first, so [`FormFields::value`] prefers them over query
/// parameters; within each source the first occurrence of a name wins.
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
/// bodies (file parts are skipped). Any other body contributes nothing.
/// Unparseable input reads as absent fields; extraction never rejects.
#[derive(Debug, Default)]
pub struct FormFields {
    pairs: Pairs,
}

impl FormFields {
    /// First value for `name`, or an empty string when the field is absent.
    pub fn value(&self, name: &str) -> String {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query: Pairs = Query::<Pairs>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let mut pairs = if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<Pairs>::from_request(req, state).await {
                Ok(Form(pairs)) => pairs,
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Ignoring unreadable form body");
                    Pairs::new()
                }
            }
        } else if content_type.starts_with("multipart/form-data") {
            read_multipart(req, state).await
        } else {
            Pairs::new()
        };

        pairs.extend(query);
        Ok(Self { pairs })
    }
}

async fn read_multipart<S>(req: Request, state: &S) -> Pairs
where
    S: Send + Sync,
{
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unreadable multipart body");
            return Pairs::new();
        }
    };

    let mut pairs = Pairs::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Stopped reading multipart body");
                break;
            }
        };
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(e) => {
                tracing::debug!(error = %e, field = %name, "Stopped reading multipart body");
                break;
            }
        }
    }
    pairs
}
