//! Payment API facade

use crate::{ApiResult, HttpClient};
use shared::models::{Payment, PaymentCreate, PaymentUpdate};

/// CRUD operations over `/payments`
#[derive(Debug, Clone)]
pub struct PaymentsApi {
    http: HttpClient,
}

impl PaymentsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /payments - list all payments
    pub async fn list(&self) -> ApiResult<Vec<Payment>> {
        self.http.get("/payments").await
    }

    /// GET /payments/{id} - fetch a single payment
    pub async fn get(&self, id: i64) -> ApiResult<Payment> {
        self.http.get(&format!("/payments/{id}")).await
    }

    /// POST /payments - create a payment record
    pub async fn create(&self, payment: &PaymentCreate) -> ApiResult<Payment> {
        self.http.post("/payments", payment).await
    }

    /// PUT /payments/{id} - partially update a payment record
    pub async fn update(&self, id: i64, patch: &PaymentUpdate) -> ApiResult<Payment> {
        self.http.put(&format!("/payments/{id}"), patch).await
    }

    /// DELETE /payments/{id} - delete a payment record
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/payments/{id}")).await
    }
}
