use super::{header_number, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};

/// Rate limit snapshot reported by Gitee's response headers
#[derive(Debug, Default)]
pub struct Rate {
    pub limit: usize,
    pub remaining: usize,
    pub reset: usize,
}

impl Rate {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        Self {
            limit: header_number(headers, HEADER_RATE_LIMIT).unwrap_or_default(),
            remaining: header_number(headers, HEADER_RATE_REMAINING).unwrap_or_default(),
            reset: header_number(headers, HEADER_RATE_RESET).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Rate, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
    use reqwest::header::HeaderMap;

    #[test]
    fn rate() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "5000".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "4996".parse().unwrap());
        headers.insert(HEADER_RATE_RESET, "1372700873".parse().unwrap());

        let r = Rate::from_headers(&headers);
        assert_eq!(r.limit, 5000);
        assert_eq!(r.remaining, 4996);
        assert_eq!(r.reset, 1372700873);
    }

    #[test]
    fn missing_headers_default_to_zero() {
        let r = Rate::from_headers(&HeaderMap::new());
        assert_eq!(r.limit, 0);
        assert_eq!(r.remaining, 0);
    }
}
