use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{de::DeserializeOwned, Serialize};

use crate::{ApiRequest, Error, Method, RawResponse, Result, Transport};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";
const NO_CONTENT: u16 = 204;

/// Characters that must be escaped within a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encodes an id for use as a path segment.
#[must_use]
pub fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Merges caller supplied headers into the default JSON headers.
///
/// A caller supplied header only replaces a default header
/// with the same (case-insensitive) name.
#[must_use]
pub fn merge_headers(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
    for (name, value) in extra {
        match headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some(header) => *header = ((*name).to_string(), (*value).to_string()),
            None => headers.push(((*name).to_string(), (*value).to_string())),
        }
    }
    headers
}

/// Interprets a response.
///
/// Returns `None` for `204 No Content` or an empty body.
/// Non-2xx responses are turned into [`Error::Api`].
pub fn decode_response<T>(response: RawResponse) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let RawResponse { status, body } = response;
    // ensure we've got 2xx status
    if !(200..=299).contains(&status) {
        log::warn!("Request failed with status {status}");
        return Err(api_error(status, &body).into());
    }
    if status == NO_CONTENT || body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|err| Error::Decode(err.to_string()))
}

fn api_error(status: u16, body: &str) -> placemark_boundary::Error {
    let payload = serde_json::from_str::<placemark_boundary::Error>(body).ok();
    let (error, message, path, timestamp) = match payload {
        Some(placemark_boundary::Error {
            error,
            message,
            path,
            timestamp,
            ..
        }) => (error, message, path, timestamp),
        None => (None, String::new(), None, None),
    };
    let message = if message.is_empty() {
        format!("Request failed with status {status}")
    } else {
        message
    };
    placemark_boundary::Error {
        status,
        error,
        message,
        path,
        timestamp,
    }
}

/// JSON client on top of a [`Transport`].
///
/// This is the only place where HTTP status codes are interpreted.
#[derive(Debug, Clone, Copy)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn request<R>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        let request = ApiRequest {
            method,
            path: path.to_owned(),
            headers: merge_headers(headers),
            body,
        };
        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    pub async fn fetch<R>(&self, method: Method, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.request(method, path, None, &[]).await?;
        expect_body(response)
    }

    pub async fn send_json<D, R>(&self, method: Method, path: &str, data: &D) -> Result<R>
    where
        D: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(data).map_err(|err| Error::Decode(err.to_string()))?;
        let response = self.request(method, path, Some(body), &[]).await?;
        expect_body(response)
    }

    /// Sends a request that is answered without content.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        self.request::<serde::de::IgnoredAny>(method, path, None, &[])
            .await?;
        Ok(())
    }
}

fn expect_body<R>(response: Option<R>) -> Result<R> {
    response.ok_or_else(|| Error::Decode("missing response body".to_string()))
}
