//! Form body extraction for both encodings a browser may send.
//!
//! `fetch` with a `FormData` body sends `multipart/form-data`; a plain HTML
//! form post or `URLSearchParams` sends `application/x-www-form-urlencoded`.
//! Both are reduced to an ordered list of text fields.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use crate::FormError;

/// Text fields of a submitted form, in the order they were sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// First value sent for `name`. An empty value counts as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Owned copy of [`FormFields::get`].
    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = FormError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&request) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, state).await?;
            return Ok(Self(pairs));
        }

        let mut multipart = Multipart::from_request(request, state).await?;
        let mut fields = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            // File inputs carry a filename; none of the forms have one.
            if field.file_name().is_some() {
                continue;
            }

            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            fields.push((name, field.text().await?));
        }

        Ok(Self(fields))
    }
}
