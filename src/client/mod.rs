//! Remote endpoint clients.
//!
//! `CatalogClient` covers the read-only list endpoints (product
//! catalog, movie browser): `GET base` returns a JSON array of
//! records, `GET base/{id}` one record. Reads are treated as pure and
//! idempotent; no caching, no retry.
//!
//! `RestCrudClient` covers the plain JSON CRUD endpoint the employee
//! table talks to (POST to create, PUT and DELETE addressed by id).

use crate::core::{RecordId, Result, StoreError};
use serde::{Serialize, de::DeserializeOwned};

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole catalog.
    pub async fn list<R: DeserializeOwned>(&self) -> Result<Vec<R>> {
        let response = self.http.get(&self.base_url).send().await?;
        let records = response.error_for_status()?.json::<Vec<R>>().await?;
        Ok(records)
    }

    /// Fetch one record by id.
    pub async fn get_by_id<R: DeserializeOwned>(&self, id: &RecordId) -> Result<R> {
        let url = self.item_url(id);
        let response = self.http.get(&url).send().await?;
        let record = response.error_for_status()?.json::<R>().await?;
        Ok(record)
    }

    fn item_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

pub struct RestCrudClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestCrudClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    pub async fn list<R: DeserializeOwned>(&self) -> Result<Vec<R>> {
        let response = self.http.get(&self.base_url).send().await?;
        let records = response.error_for_status()?.json::<Vec<R>>().await?;
        Ok(records)
    }

    /// POST a new record. The caller assigns the identifier before the
    /// call (the endpoint stores whatever body it receives).
    pub async fn create<R: Serialize + Sync>(&self, record: &R) -> Result<()> {
        let response = self
            .http
            .post(&self.base_url)
            .json(record)
            .send()
            .await
            .map_err(write_failed)?;
        ensure_write_succeeded(response)
    }

    /// PUT a full replacement of the record stored under `id`.
    pub async fn update<R: Serialize + Sync>(&self, id: &RecordId, record: &R) -> Result<()> {
        let url = self.item_url(id);
        let response = self
            .http
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(write_failed)?;
        ensure_write_succeeded(response)
    }

    pub async fn delete_by_id(&self, id: &RecordId) -> Result<()> {
        let url = self.item_url(id);
        let response = self.http.delete(&url).send().await.map_err(write_failed)?;
        ensure_write_succeeded(response)
    }

    fn item_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

// A failed write is a persistence fault whether the transport or the
// endpoint rejected it; `Fetch` stays reserved for the read paths.
fn write_failed(err: reqwest::Error) -> StoreError {
    StoreError::PersistenceWrite(err.to_string())
}

fn ensure_write_succeeded(response: reqwest::Response) -> Result<()> {
    if let Err(err) = response.error_for_status() {
        return Err(StoreError::PersistenceWrite(err.to_string()));
    }
    Ok(())
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
