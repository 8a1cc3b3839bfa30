//! Guest API facade

use crate::{ApiResult, HttpClient};
use shared::models::{Guest, GuestCreate, GuestUpdate};

/// CRUD operations over `/guests`
#[derive(Debug, Clone)]
pub struct GuestsApi {
    http: HttpClient,
}

impl GuestsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /guests - list all guests
    pub async fn list(&self) -> ApiResult<Vec<Guest>> {
        self.http.get("/guests").await
    }

    /// GET /guests/{id} - fetch a single guest
    pub async fn get(&self, id: i64) -> ApiResult<Guest> {
        self.http.get(&format!("/guests/{id}")).await
    }

    /// POST /guests - create a guest
    pub async fn create(&self, guest: &GuestCreate) -> ApiResult<Guest> {
        self.http.post("/guests", guest).await
    }

    /// PUT /guests/{id} - partially update a guest
    pub async fn update(&self, id: i64, patch: &GuestUpdate) -> ApiResult<Guest> {
        self.http.put(&format!("/guests/{id}"), patch).await
    }

    /// DELETE /guests/{id} - delete a guest
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/guests/{id}")).await
    }
}
