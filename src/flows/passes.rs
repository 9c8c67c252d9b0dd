//! Passes and accommodation purchase flow
//!
//! Loads the live catalogs, merges them with the static display templates,
//! and drives the buy path: auth gate, sold-out gate, order creation and
//! the hosted-checkout redirect URL. A failed attempt is not retried; the
//! user clicks buy again.

use tracing::{debug, info};
use url::Url;

use crate::models::passes::{
    accommodation_templates, pass_templates, AccommodationType, CatalogTemplate, PassType,
};
use crate::models::payment::OrderItem;
use crate::services::{payment_error_message, ServiceFactory};
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::logging;

/// A display card: static template plus the matching live item, if any
#[derive(Debug, Clone)]
pub struct CatalogCard<T> {
    pub template: CatalogTemplate,
    pub live: Option<T>,
}

impl CatalogCard<PassType> {
    /// A card with no live item renders as unavailable
    pub fn is_sold_out(&self) -> bool {
        self.live.as_ref().map(PassType::is_sold_out).unwrap_or(true)
    }
}

impl CatalogCard<AccommodationType> {
    pub fn is_sold_out(&self) -> bool {
        self.live
            .as_ref()
            .map(AccommodationType::is_sold_out)
            .unwrap_or(true)
    }
}

/// The passes-and-stay purchase surface
#[derive(Debug)]
pub struct PassesDesk {
    services: ServiceFactory,
    pub passes: Vec<PassType>,
    pub accommodations: Vec<AccommodationType>,
    /// Serial id from the session user's full profile, for the ab_id param
    profile_serial_id: Option<i64>,
}

impl PassesDesk {
    /// Load both catalogs concurrently and, for a logged-in user, the
    /// profile serial id used in the checkout URL
    pub async fn load(services: &ServiceFactory) -> Self {
        let (passes, accommodations) = tokio::join!(
            services.payment_service.get_pass_types(),
            services.payment_service.get_accommodation_types(),
        );

        let passes = passes.unwrap_or_default();
        let accommodations = accommodations.unwrap_or_default();
        debug!(
            passes = passes.len(),
            accommodations = accommodations.len(),
            "Catalog loaded"
        );

        let profile_serial_id = match services.auth_service.current_user() {
            Some(user) => services
                .user_service
                .get_profile(user.id)
                .await
                .ok()
                .flatten()
                .and_then(|profile| profile.serial_id)
                .or(user.serial_id),
            None => None,
        };

        Self {
            services: services.clone(),
            passes,
            accommodations,
            profile_serial_id,
        }
    }

    /// Merge the pass catalog with its display templates
    pub fn pass_cards(&self) -> Vec<CatalogCard<PassType>> {
        pass_templates()
            .into_iter()
            .map(|template| CatalogCard {
                live: self.passes.iter().find(|p| p.id == template.id).cloned(),
                template,
            })
            .collect()
    }

    /// Merge the accommodation catalog with its display templates
    pub fn accommodation_cards(&self) -> Vec<CatalogCard<AccommodationType>> {
        accommodation_templates()
            .into_iter()
            .map(|template| CatalogCard {
                live: self
                    .accommodations
                    .iter()
                    .find(|a| a.id == template.id)
                    .cloned(),
                template,
            })
            .collect()
    }

    /// Buy a pass; returns the checkout URL to navigate to
    pub async fn buy_pass(&self, pass_id: i64) -> Result<Url> {
        let pass = self
            .passes
            .iter()
            .find(|p| p.id == pass_id)
            .ok_or_else(|| AbhivyaktiError::InvalidInput("Unknown pass".to_string()))?
            .clone();

        if pass.is_sold_out() {
            self.services.notifier.error("Sold out");
            return Err(AbhivyaktiError::SoldOut(format!("pass {}", pass_id)));
        }

        self.buy(
            OrderItem::Pass(pass_id),
            pass.payment_page_link.as_deref(),
            format!("buy:pass:{}", pass_id),
        )
        .await
    }

    /// Book an accommodation; returns the checkout URL to navigate to
    pub async fn buy_accommodation(&self, accommodation_id: i64) -> Result<Url> {
        let stay = self
            .accommodations
            .iter()
            .find(|a| a.id == accommodation_id)
            .ok_or_else(|| AbhivyaktiError::InvalidInput("Unknown accommodation".to_string()))?
            .clone();

        if stay.is_sold_out() {
            self.services.notifier.error("Sold out");
            return Err(AbhivyaktiError::SoldOut(format!(
                "accommodation {}",
                accommodation_id
            )));
        }

        self.buy(
            OrderItem::Accommodation(accommodation_id),
            stay.payment_page_link.as_deref(),
            format!("buy:accommodation:{}", accommodation_id),
        )
        .await
    }

    /// Shared buy path: auth gate, duplicate-click guard, order, redirect URL
    async fn buy(
        &self,
        item: OrderItem,
        payment_page_link: Option<&str>,
        in_flight_key: String,
    ) -> Result<Url> {
        // Auth gate fires before any request goes out.
        let user = match self.services.auth_service.require_user() {
            Ok(user) => user,
            Err(e) => {
                self.services.notifier.error("Please login first");
                return Err(e);
            }
        };

        let _guard = self
            .services
            .in_flight
            .try_begin(&in_flight_key)
            .ok_or(AbhivyaktiError::RequestInFlight(in_flight_key))?;

        let order = match self.services.payment_service.create_order(item).await {
            Ok(order) => order,
            Err(e) => {
                self.services.notifier.error(payment_error_message(&e));
                return Err(e);
            }
        };
        logging::log_payment_event(&order.id, "order_created", Some(user.id));

        self.services.notifier.success("Redirecting to payment...");

        match self.services.payment_service.build_payment_url(
            payment_page_link,
            &order.id,
            &user,
            self.profile_serial_id,
        ) {
            Ok(url) => {
                info!(order_id = %order.id, "Checkout redirect built");
                Ok(url)
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to create order");
                Err(e)
            }
        }
    }
}
