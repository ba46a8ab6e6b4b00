use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::TEST_SESSION_ID, fixtures::remote::RemoteFixtures};

impl<'a> RemoteFixtures<'a> {
    /// Create `GET /api/v3/series` returning the given Sonarr series.
    pub fn create_series_endpoint(&mut self, series: Vec<Value>, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/api/v3/series", Value::Array(series), expected_requests)
    }

    /// Create `GET /api/v3/movie` returning the given Radarr movies.
    pub fn create_movie_endpoint(&mut self, movies: Vec<Value>, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/api/v3/movie", Value::Array(movies), expected_requests)
    }

    /// Create `GET /api/v3/{resource}/{id}` returning a single Sonarr/Radarr record.
    pub fn create_media_get_endpoint(
        &mut self,
        resource: &str,
        id: i32,
        media: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/v3/{}/{}", resource, id);
        self.json_endpoint("GET", &url, media, expected_requests)
    }

    /// Create `DELETE /api/v3/{resource}/{id}` answering with `status`.
    pub fn create_media_delete_endpoint(
        &mut self,
        resource: &str,
        id: i32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/v3/{}/{}", resource, id);

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create `PUT /api/v3/{resource}/{id}` answering with `status`.
    pub fn create_media_update_endpoint(
        &mut self,
        resource: &str,
        id: i32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/v3/{}/{}", resource, id);

        self.setup
            .server
            .mock("PUT", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }

    /// Create `GET /api/v1/request` returning one page with the given requests.
    pub fn create_request_endpoint(&mut self, requests: Vec<Value>, expected_requests: usize) -> Mock {
        let body = request_page(requests, 1, 1);

        self.setup
            .server
            .mock("GET", "/api/v1/request")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create `GET /api/v1/request` for the page starting at `skip`.
    ///
    /// # Arguments
    /// - `requests` - Requests on this page
    /// - `skip` - Offset the client must send for this page
    /// - `page` - 1-based page number reported in `pageInfo`
    /// - `pages` - Total page count reported in `pageInfo`
    pub fn create_request_page_endpoint(
        &mut self,
        requests: Vec<Value>,
        skip: usize,
        page: usize,
        pages: usize,
    ) -> Mock {
        let body = request_page(requests, page, pages);

        self.setup
            .server
            .mock("GET", "/api/v1/request")
            .match_query(Matcher::UrlEncoded("skip".to_string(), skip.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create()
    }

    /// Create `DELETE /api/v1/request/{id}` answering with `status`.
    pub fn create_request_delete_endpoint(
        &mut self,
        request_id: i32,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/v1/request/{}", request_id);

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create `GET /api/v1/indexer` returning the given Prowlarr indexers.
    pub fn create_indexer_endpoint(&mut self, indexers: Vec<Value>, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/api/v1/indexer", Value::Array(indexers), expected_requests)
    }

    /// Create the qBittorrent login endpoint handing out a session cookie.
    ///
    /// Login is lazy and repeated after a rejected session, so the mock only
    /// requires at least one call.
    pub fn create_qbittorrent_login_endpoint(&mut self) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/v2/auth/login")
            .with_status(200)
            .with_header(
                "set-cookie",
                &format!("SID={}; HttpOnly; SameSite=Strict; path=/", TEST_SESSION_ID),
            )
            .with_body("Ok.")
            .expect_at_least(1)
            .create()
    }

    /// Create `GET /api/v2/torrents/info` returning the given torrents.
    pub fn create_torrent_endpoint(&mut self, torrents: Vec<Value>, expected_requests: usize) -> Mock {
        self.json_endpoint(
            "GET",
            "/api/v2/torrents/info",
            Value::Array(torrents),
            expected_requests,
        )
    }

    /// Create `POST /api/v2/torrents/delete` for one hash, answering with `status`.
    pub fn create_torrent_delete_endpoint(
        &mut self,
        hash: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/v2/torrents/delete")
            .match_body(Matcher::UrlEncoded("hashes".to_string(), hash.to_string()))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    fn json_endpoint(
        &mut self,
        method: &str,
        url: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, url)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }
}

fn request_page(requests: Vec<Value>, page: usize, pages: usize) -> Value {
    json!({
        "pageInfo": { "pages": pages, "pageSize": requests.len(), "results": requests.len(), "page": page },
        "results": requests
    })
}
