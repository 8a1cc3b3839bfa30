//! Room API facade

use crate::{ApiResult, HttpClient};
use shared::models::{Room, RoomCreate, RoomUpdate};

/// CRUD operations over `/rooms`
#[derive(Debug, Clone)]
pub struct RoomsApi {
    http: HttpClient,
}

impl RoomsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /rooms - list all rooms
    pub async fn list(&self) -> ApiResult<Vec<Room>> {
        self.http.get("/rooms").await
    }

    /// GET /rooms/{id} - fetch a single room
    pub async fn get(&self, id: i64) -> ApiResult<Room> {
        self.http.get(&format!("/rooms/{id}")).await
    }

    /// POST /rooms - create a room
    pub async fn create(&self, room: &RoomCreate) -> ApiResult<Room> {
        self.http.post("/rooms", room).await
    }

    /// PUT /rooms/{id} - partially update a room
    pub async fn update(&self, id: i64, patch: &RoomUpdate) -> ApiResult<Room> {
        self.http.put(&format!("/rooms/{id}"), patch).await
    }

    /// DELETE /rooms/{id} - delete a room
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/rooms/{id}")).await
    }
}
