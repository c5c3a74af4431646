//! HTTP client for the backend REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{AnalyticsOverview, LoginResponse, QrLink, RegisterRequest, TableLink, UserInfo};
use shared::models::{
    CategoryCreate, CategoryUpdate, Dish, DishCreate, DishUpdate, MenuCategory, Order, OrderCreate,
    OrderPay, OrderStatus, Reservation, ReservationCreate, Restaurant, StopListUpdate, Table,
    TableContext, TableStatus, TableStatusUpdate, WaiterCall, WaiterCallCreate, Zone,
};
use validator::Validate;

/// Third-party QR image rendering service, parameterized by size and data
const QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// HTTP client for making requests to the backend
///
/// One configured `reqwest::Client` shared by every feature module.
/// No retry policy is applied here; callers decide whether to retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the authentication token in place
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Fail fast when a protected call is attempted without a token
    fn require_auth(&self) -> ClientResult<()> {
        if self.token.is_none() {
            return Err(ClientError::Unauthorized);
        }
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, path = %path, "API request");
        let mut request = self.client.request(method, &url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        request
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::POST, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request without body
    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::PATCH, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring the response body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response, deserializing the body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Map non-2xx statuses to errors, surfacing the body's detail verbatim
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let detail = Self::error_detail(response).await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(detail)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(detail))
                }
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    detail,
                }),
            };
        }

        Ok(response)
    }

    /// Extract the `detail` field of an error body, falling back to raw text
    async fn error_detail(response: reqwest::Response) -> ClientResult<String> {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            detail: String,
        }

        let text = response.text().await?;
        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Ok(body.detail),
            Err(_) => Ok(text),
        }
    }

    // ========== Auth API ==========

    /// Login with username and password (OAuth2 password form)
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let url = format!("{}{}", self.base_url, "/api/auth/login");
        tracing::debug!(username = %username, "Login request");

        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<UserInfo> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.post("/api/auth/register", request).await
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.require_auth()?;
        self.get("/api/auth/me").await
    }

    // ========== Restaurant API ==========

    /// Get a restaurant by id
    pub async fn restaurant(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        self.get(&format!("/api/restaurants/{}", restaurant_id)).await
    }

    /// Get a restaurant's menu (categories with embedded dishes)
    pub async fn menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuCategory>> {
        self.get(&format!("/api/restaurants/{}/menu", restaurant_id))
            .await
    }

    /// Get a restaurant's zones
    pub async fn zones(&self, restaurant_id: i64) -> ClientResult<Vec<Zone>> {
        self.get(&format!("/api/restaurants/{}/zones", restaurant_id))
            .await
    }

    // ========== Table API ==========

    /// Resolve a table short code to its table context
    pub async fn resolve_table(&self, short_code: &str) -> ClientResult<TableContext> {
        self.get(&format!("/api/t/{}", short_code)).await
    }

    /// Look up the shareable link behind a short code
    pub async fn qr_link(&self, short_code: &str) -> ClientResult<QrLink> {
        self.get(&format!("/api/qr/{}", short_code)).await
    }

    /// Call a waiter to a table
    pub async fn call_waiter(
        &self,
        table_id: i64,
        message: Option<String>,
    ) -> ClientResult<WaiterCall> {
        let payload = WaiterCallCreate { message };
        self.post(&format!("/api/tables/{}/call-waiter", table_id), &payload)
            .await
    }

    /// Get the active order for a table
    pub async fn current_order(&self, table_id: i64) -> ClientResult<Order> {
        self.get(&format!("/api/tables/{}/current-order", table_id))
            .await
    }

    /// Update a table's status
    pub async fn set_table_status(
        &self,
        table_id: i64,
        status: TableStatus,
    ) -> ClientResult<Table> {
        self.require_auth()?;
        let payload = TableStatusUpdate { status };
        self.patch(&format!("/api/tables/{}/status", table_id), &payload)
            .await
    }

    /// Generate a short link for a table
    pub async fn generate_table_link(
        &self,
        restaurant_id: i64,
        hall_id: i64,
        table_id: i64,
    ) -> ClientResult<TableLink> {
        self.require_auth()?;
        self.post_empty(&format!(
            "/api/restaurants/{}/halls/{}/tables/{}/generate-link",
            restaurant_id, hall_id, table_id
        ))
        .await
    }

    /// Build the external QR image URL for a table link
    ///
    /// The image service is an opaque third party; the URL is
    /// constructed but never fetched by this client.
    pub fn qr_image_url(data: &str, size: u32) -> String {
        let url = reqwest::Url::parse_with_params(
            QR_IMAGE_ENDPOINT,
            &[("size", format!("{}x{}", size, size)), ("data", data.to_string())],
        )
        .expect("QR image endpoint URL is valid");
        url.to_string()
    }

    // ========== Order API ==========

    /// Place an order
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        self.require_auth()?;
        self.post("/api/orders", order).await
    }

    /// Pay an order, optionally with a tip
    pub async fn pay_order(&self, order_id: i64, payment: &OrderPay) -> ClientResult<Order> {
        self.require_auth()?;
        self.post(&format!("/api/orders/{}/pay", order_id), payment)
            .await
    }

    /// Request an order status transition
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<Order> {
        self.require_auth()?;
        self.patch_empty(&format!("/api/orders/{}/status?status={}", order_id, status))
            .await
    }

    /// Get the current user's orders
    pub async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        self.require_auth()?;
        self.get("/api/my-orders").await
    }

    // ========== Waiter API ==========

    /// Get the waiter order queue
    pub async fn waiter_orders(&self) -> ClientResult<Vec<Order>> {
        self.require_auth()?;
        self.get("/api/waiter/orders").await
    }

    /// Get open waiter calls
    pub async fn waiter_calls(&self) -> ClientResult<Vec<WaiterCall>> {
        self.require_auth()?;
        self.get("/api/waiter-calls").await
    }

    /// Mark a waiter call resolved
    pub async fn resolve_waiter_call(&self, call_id: i64) -> ClientResult<WaiterCall> {
        self.require_auth()?;
        self.patch_empty(&format!("/api/waiter-calls/{}/resolve", call_id))
            .await
    }

    // ========== Reservation API ==========

    /// Create a reservation
    pub async fn create_reservation(
        &self,
        reservation: &ReservationCreate,
    ) -> ClientResult<Reservation> {
        reservation
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.post("/api/reservations", reservation).await
    }

    /// List reservations visible to the current user
    pub async fn reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.require_auth()?;
        self.get("/api/reservations").await
    }

    // ========== Analytics API ==========

    /// Get the analytics overview for a restaurant
    pub async fn analytics_overview(&self, restaurant_id: i64) -> ClientResult<AnalyticsOverview> {
        self.require_auth()?;
        self.get(&format!("/api/restaurants/{}/analytics/overview", restaurant_id))
            .await
    }

    // ========== Menu management API ==========

    /// Create a dish
    pub async fn create_dish(&self, restaurant_id: i64, dish: &DishCreate) -> ClientResult<Dish> {
        self.require_auth()?;
        self.post(&format!("/api/restaurants/{}/dishes", restaurant_id), dish)
            .await
    }

    /// Update a dish
    pub async fn update_dish(&self, dish_id: i64, update: &DishUpdate) -> ClientResult<Dish> {
        self.require_auth()?;
        self.patch(&format!("/api/dishes/{}", dish_id), update).await
    }

    /// Delete a dish
    pub async fn delete_dish(&self, dish_id: i64) -> ClientResult<()> {
        self.require_auth()?;
        self.delete(&format!("/api/dishes/{}", dish_id)).await
    }

    /// Toggle a dish's stop-list flag
    pub async fn set_stop_list(&self, dish_id: i64, on_stop_list: bool) -> ClientResult<Dish> {
        self.require_auth()?;
        let payload = StopListUpdate { on_stop_list };
        self.patch(&format!("/api/dishes/{}/stop-list", dish_id), &payload)
            .await
    }

    /// Create a menu category
    pub async fn create_category(
        &self,
        restaurant_id: i64,
        category: &CategoryCreate,
    ) -> ClientResult<MenuCategory> {
        self.require_auth()?;
        self.post(
            &format!("/api/restaurants/{}/categories", restaurant_id),
            category,
        )
        .await
    }

    /// Update a menu category
    pub async fn update_category(
        &self,
        category_id: i64,
        update: &CategoryUpdate,
    ) -> ClientResult<MenuCategory> {
        self.require_auth()?;
        self.patch(&format!("/api/categories/{}", category_id), update)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_auth_without_token() {
        let client = ApiClient::new(&ClientConfig::default());
        assert!(matches!(
            client.require_auth(),
            Err(ClientError::Unauthorized)
        ));
    }

    #[test]
    fn test_require_auth_with_token() {
        let client = ApiClient::new(&ClientConfig::default()).with_token("secret");
        assert!(client.require_auth().is_ok());
        assert_eq!(client.token(), Some("secret"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:8000/"));
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_qr_image_url_parameters() {
        let url = ApiClient::qr_image_url("https://example.com/t/ABC123", 200);
        assert!(url.starts_with(QR_IMAGE_ENDPOINT));
        assert!(url.contains("size=200x200"));
        assert!(url.contains("data="));
    }

    #[tokio::test]
    async fn test_protected_call_fails_fast_without_token() {
        let client = ApiClient::new(&ClientConfig::default());
        // No request is issued; the error comes from the missing token.
        assert!(matches!(client.me().await, Err(ClientError::Unauthorized)));
        assert!(matches!(
            client.my_orders().await,
            Err(ClientError::Unauthorized)
        ));
    }
}
