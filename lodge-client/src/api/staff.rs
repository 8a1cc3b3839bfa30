//! Staff API facade

use crate::{ApiResult, HttpClient};
use shared::models::{Staff, StaffCreate, StaffUpdate};

/// CRUD operations over `/staff`
#[derive(Debug, Clone)]
pub struct StaffApi {
    http: HttpClient,
}

impl StaffApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /staff - list all staff members
    pub async fn list(&self) -> ApiResult<Vec<Staff>> {
        self.http.get("/staff").await
    }

    /// GET /staff/{id} - fetch a single staff member
    pub async fn get(&self, id: i64) -> ApiResult<Staff> {
        self.http.get(&format!("/staff/{id}")).await
    }

    /// POST /staff - create a staff member
    pub async fn create(&self, staff: &StaffCreate) -> ApiResult<Staff> {
        self.http.post("/staff", staff).await
    }

    /// PUT /staff/{id} - partially update a staff member
    pub async fn update(&self, id: i64, patch: &StaffUpdate) -> ApiResult<Staff> {
        self.http.put(&format!("/staff/{id}"), patch).await
    }

    /// DELETE /staff/{id} - delete a staff member
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/staff/{id}")).await
    }
}
