use super::{header_number, HEADER_LINK, HEADER_TOTAL_COUNT, HEADER_TOTAL_PAGE};
use serde::Serialize;
use url::Url;

/// Represents `Pagination` information from a Gitee API request
#[derive(Debug, Default)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    /// Total number of results across all pages, from the `total_count` header
    pub total_count: Option<usize>,
    /// Total number of pages, from the `total_page` header
    pub total_page: Option<usize>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self {
            total_count: header_number(headers, HEADER_TOTAL_COUNT),
            total_page: header_number(headers, HEADER_TOTAL_PAGE),
            ..Self::default()
        };

        let links = match headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            Some(links) => links,
            None => return pagination,
        };

        for link in links.split(',') {
            let mut segments = link.split(';').map(str::trim);

            // The first segment is the target url, the rest are parameters
            // like rel
            let target = match segments.next() {
                Some(target) if target.starts_with('<') && target.ends_with('>') => {
                    &target[1..target.len() - 1]
                }
                _ => continue,
            };

            let url = match Url::parse(target) {
                Ok(url) => url,
                Err(_) => continue,
            };

            let page = match url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .and_then(|(_, v)| v.parse().ok())
            {
                Some(page) => page,
                None => continue,
            };

            for rel in segments {
                match rel {
                    "rel=\"next\"" => pagination.next_page = Some(page),
                    "rel=\"prev\"" => pagination.prev_page = Some(page),
                    "rel=\"first\"" => pagination.first_page = Some(page),
                    "rel=\"last\"" => pagination.last_page = Some(page),
                    _ => {}
                }
            }
        }

        pagination
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PaginationOptions {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[cfg(test)]
mod test {
    use super::{Pagination, HEADER_LINK, HEADER_TOTAL_COUNT, HEADER_TOTAL_PAGE};
    use reqwest::header::HeaderMap;

    #[test]
    fn pagination() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://gitee.com/api/v5/repos/alice/test-repo/collaborators?page=3&per_page=100>; rel="next", <https://gitee.com/api/v5/repos/alice/test-repo/collaborators?page=50&per_page=100>; rel="last""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());
        headers.insert(HEADER_TOTAL_COUNT, "4987".parse().unwrap());
        headers.insert(HEADER_TOTAL_PAGE, "50".parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.last_page, Some(50));
        assert_eq!(p.total_count, Some(4987));
        assert_eq!(p.total_page, Some(50));
    }

    #[test]
    fn no_link_header() {
        let p = Pagination::from_headers(&HeaderMap::new());
        assert_eq!(p.next_page, None);
        assert_eq!(p.total_count, None);
    }
}
