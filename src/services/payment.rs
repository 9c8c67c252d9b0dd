//! Payment service
//!
//! Pass/accommodation catalog reads, payment-order creation and the hosted
//! checkout redirect URL. The client never talks to the payment provider
//! directly; it creates an order server-side and hands the browser a
//! prefilled payment-page URL.

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::api::{ApiClient, Base};
use crate::models::passes::{AccommodationType, PassType};
use crate::models::payment::{CreateOrderResponse, OrderItem, PaymentOrder};
use crate::models::user::User;
use crate::utils::abid::serial_id_to_abid;
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::helpers::normalize_phone;

#[derive(Debug, Deserialize)]
struct CatalogResponse<T> {
    #[serde(default)]
    success: bool,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// Payment and catalog service
#[derive(Debug, Clone)]
pub struct PaymentService {
    api: ApiClient,
    country_code: String,
}

impl PaymentService {
    /// Create a new PaymentService instance
    pub fn new(api: ApiClient, country_code: String) -> Self {
        Self { api, country_code }
    }

    /// Fetch the live pass catalog
    pub async fn get_pass_types(&self) -> Result<Vec<PassType>> {
        debug!("Fetching pass types");
        let response: CatalogResponse<PassType> =
            self.api.get(Base::Backend, "/api/passes").await?;
        if !response.success {
            return Ok(Vec::new());
        }
        Ok(response.data)
    }

    /// Fetch the live accommodation catalog
    pub async fn get_accommodation_types(&self) -> Result<Vec<AccommodationType>> {
        debug!("Fetching accommodation types");
        let response: CatalogResponse<AccommodationType> =
            self.api.get(Base::Backend, "/api/accommodations").await?;
        if !response.success {
            return Ok(Vec::new());
        }
        Ok(response.data)
    }

    /// Create a payment order for a pass or an accommodation
    pub async fn create_order(&self, item: OrderItem) -> Result<PaymentOrder> {
        let request = item.to_request();
        request.validate()?;

        let response: CreateOrderResponse = self
            .api
            .post(Base::Backend, "/api/payment/create-order", &request)
            .await?;
        info!(order_id = %response.order.id, "Payment order created");
        Ok(response.order)
    }

    /// Build the hosted checkout redirect URL
    ///
    /// Attaches `order_id`, `ab_id`, `email`, `name` and `phone` query
    /// parameters to the server-supplied payment page link. The phone is
    /// normalized to the configured country prefix the checkout prefill
    /// expects.
    pub fn build_payment_url(
        &self,
        payment_page_link: Option<&str>,
        order_id: &str,
        user: &User,
        serial_id: Option<i64>,
    ) -> Result<Url> {
        let base_link = payment_page_link.filter(|link| !link.is_empty()).ok_or_else(|| {
            AbhivyaktiError::InvalidInput("Payment link not available for this item".to_string())
        })?;

        let mut url = Url::parse(base_link).map_err(|_| {
            AbhivyaktiError::InvalidInput("Invalid payment link received from server".to_string())
        })?;

        url.query_pairs_mut()
            .append_pair("order_id", order_id)
            .append_pair("ab_id", &serial_id_to_abid(serial_id))
            .append_pair("email", &user.email)
            .append_pair("name", &user.display_name())
            .append_pair(
                "phone",
                &normalize_phone(
                    user.phone_number.as_deref().unwrap_or(""),
                    &self.country_code,
                ),
            );

        Ok(url)
    }
}

/// Convert technical payment failures to the user-facing wording
pub fn payment_error_message(error: &AbhivyaktiError) -> String {
    let text = error.to_string().to_lowercase();

    if text.contains("network") || text.contains("connect") {
        "Network error. Check your connection and try again".to_string()
    } else if text.contains("order") {
        "Can't process payment. Try again later".to_string()
    } else if text.contains("json") || text.contains("parse") {
        "Something went wrong. Try again".to_string()
    } else {
        "Payment failed. Please try again".to_string()
    }
}
