use reqwest::{
    StatusCode,
    header::{ETAG, EXPIRES, HeaderMap, LAST_MODIFIED},
};
use serde::de::DeserializeOwned;
use skyhook_core::Timestamp;

use crate::{EsiError, EsiResult};

pub const PAGES_HEADER: &str = "x-pages";
pub const ERROR_LIMIT_REMAIN_HEADER: &str = "x-esi-error-limit-remain";
pub const ERROR_LIMIT_RESET_HEADER: &str = "x-esi-error-limit-reset";

/// Undecoded ESI response: what the `_raw` endpoint variants hand back.
#[derive(Clone, Debug)]
pub struct EsiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl EsiResponse {
    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body. An empty body is treated as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> EsiResult<T> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(EsiError::Decode)
    }

    /// Page count from `X-Pages`; `1` when the header is absent or garbled.
    pub fn pages(&self) -> u32 {
        self.header_u32(PAGES_HEADER)
            .filter(|pages| *pages > 0)
            .unwrap_or(1)
    }

    pub fn expires(&self) -> Option<Timestamp> {
        self.header_str(EXPIRES.as_str())
            .and_then(Timestamp::from_http_date)
    }

    pub fn last_modified(&self) -> Option<Timestamp> {
        self.header_str(LAST_MODIFIED.as_str())
            .and_then(Timestamp::from_http_date)
    }

    pub fn etag(&self) -> Option<&str> {
        self.header_str(ETAG.as_str())
    }

    pub fn error_limit_remain(&self) -> Option<u32> {
        self.header_u32(ERROR_LIMIT_REMAIN_HEADER)
    }

    pub fn error_limit_reset(&self) -> Option<u32> {
        self.header_u32(ERROR_LIMIT_RESET_HEADER)
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    fn header_u32(&self, name: &str) -> Option<u32> {
        self.header_str(name)?.trim().parse().ok()
    }
}

/// Decodes a single response body.
pub fn parse_response<T: DeserializeOwned>(response: &EsiResponse) -> EsiResult<T> {
    response.json()
}

/// Decodes every page as an array and flattens them in page order.
pub fn concat_responses<T: DeserializeOwned>(responses: &[EsiResponse]) -> EsiResult<Vec<T>> {
    let mut items = Vec::new();
    for response in responses {
        let page: Vec<T> = response.json()?;
        items.extend(page);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use reqwest::{
        StatusCode,
        header::{HeaderMap, HeaderValue},
    };

    use super::{EsiResponse, concat_responses, parse_response};
    use crate::EsiError;

    fn response(headers: &[(&'static str, &str)], body: &str) -> EsiResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_str(value).expect("header value"));
        }
        EsiResponse::from_parts(StatusCode::OK, map, body.as_bytes().to_vec())
    }

    #[test]
    fn pages_defaults_to_one() {
        assert_eq!(response(&[], "[]").pages(), 1);
        assert_eq!(response(&[("x-pages", "abc")], "[]").pages(), 1);
        assert_eq!(response(&[("x-pages", "0")], "[]").pages(), 1);
        assert_eq!(response(&[("x-pages", "7")], "[]").pages(), 7);
    }

    #[test]
    fn reads_cache_and_error_limit_headers() {
        let response = response(
            &[
                ("expires", "Tue, 06 May 2003 12:34:56 GMT"),
                ("etag", "\"abc123\""),
                ("x-esi-error-limit-remain", "87"),
                ("x-esi-error-limit-reset", "41"),
            ],
            "{}",
        );

        assert_eq!(
            response.expires().map(|ts| ts.as_epoch_secs()),
            Some(1_052_224_496)
        );
        assert_eq!(response.etag(), Some("\"abc123\""));
        assert_eq!(response.error_limit_remain(), Some(87));
        assert_eq!(response.error_limit_reset(), Some(41));
        assert!(response.last_modified().is_none());
    }

    #[test]
    fn concatenates_pages_in_order() {
        let pages = vec![response(&[], "[1,2]"), response(&[], "[3]"), response(&[], "[]")];
        let items: Vec<i32> = concat_responses(&pages).expect("concat");
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_body_decodes_as_unit_but_not_as_list() {
        let empty = response(&[], "");
        parse_response::<()>(&empty).expect("unit from empty body");

        let err = parse_response::<Vec<i32>>(&empty).expect_err("list needs a body");
        assert!(matches!(err, EsiError::Decode(_)));
    }
}
