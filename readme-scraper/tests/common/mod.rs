//! In-memory transport shared by the integration tests.
#![allow(dead_code)]

use readme_scraper::client::DEFAULT_API_BASE;
use readme_scraper::{ClientError, Endpoints, MediaType, Transport};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

enum Canned {
    Body(Vec<u8>),
    Status(u16),
}

/// Serves canned responses by URL and records every request.
///
/// Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<(String, MediaType)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, url: impl AsRef<str>, value: Value) -> Self {
        let body = serde_json::to_vec(&value).unwrap();
        self.responses
            .insert(url.as_ref().to_string(), Canned::Body(body));
        self
    }

    pub fn raw(mut self, url: impl AsRef<str>, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(url.as_ref().to_string(), Canned::Body(body.into()));
        self
    }

    pub fn status(mut self, url: impl AsRef<str>, status: u16) -> Self {
        self.responses
            .insert(url.as_ref().to_string(), Canned::Status(status));
        self
    }

    /// Registers a listing for `user` with one page per entry in `pages`,
    /// followed by the terminating empty page.
    pub fn listing(mut self, user: &str, pages: &[Vec<Value>]) -> Self {
        for (i, page) in pages.iter().enumerate() {
            self = self.json(repos_page_url(user, i as u32 + 1), Value::Array(page.clone()));
        }
        self.json(repos_page_url(user, pages.len() as u32 + 1), json!([]))
    }

    /// Registers a README for `full_name` served from a raw download link.
    pub fn readme(self, full_name: &str, body: impl Into<Vec<u8>>) -> Self {
        let download_url = download_url(full_name);
        self.json(
            readme_url(full_name),
            json!({ "name": "README.md", "download_url": &download_url }),
        )
        .raw(download_url, body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn requests_with_media(&self) -> Vec<(String, MediaType)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, url: &Url, media: MediaType) -> Result<Vec<u8>, ClientError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), media));

        match self.responses.get(url.as_str()) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) if *status != 404 => Err(ClientError::RequestFailed {
                url: url.to_string(),
                status: *status,
            }),
            _ => Err(ClientError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(DEFAULT_API_BASE).unwrap()
}

pub fn repos_page_url(user: &str, page: u32) -> String {
    endpoints().repos_page(user, page).to_string()
}

pub fn readme_url(full_name: &str) -> String {
    endpoints().readme(full_name).to_string()
}

pub fn download_url(full_name: &str) -> String {
    format!("https://raw.githubusercontent.com/{full_name}/main/README.md")
}

/// A listing entry as GitHub returns it, trimmed to a few fields.
pub fn repo(owner: &str, name: &str, description: Option<&str>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "description": description,
        "private": false,
        "fork": false,
    })
}

/// `count` numbered repositories for one listing page.
pub fn repo_page(owner: &str, page: u32, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| repo(owner, &format!("repo-{page}-{i}"), None))
        .collect()
}
