//! Pass and accommodation models
//!
//! Live inventory items fetched from the backend plus the static display
//! templates they are merged with. Sold-out state derived here is for
//! optimistic display only; the server owns capacity accounting.

use serde::{Deserialize, Serialize};

/// A purchasable festival pass type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassType {
    pub id: i64,
    #[serde(default)]
    pub price: Option<i64>,
    /// Total capacity
    pub count: i64,
    pub count_purchased: i64,
    #[serde(default)]
    pub payment_page_link: Option<String>,
}

impl PassType {
    pub fn is_sold_out(&self) -> bool {
        self.count_purchased >= self.count
    }

    pub fn available(&self) -> i64 {
        (self.count - self.count_purchased).max(0)
    }
}

/// A bookable accommodation type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationType {
    pub id: i64,
    #[serde(default)]
    pub price: Option<i64>,
    /// Total capacity
    pub count: i64,
    pub count_booked: i64,
    #[serde(default)]
    pub payment_page_link: Option<String>,
}

impl AccommodationType {
    pub fn is_sold_out(&self) -> bool {
        self.count_booked >= self.count
    }

    pub fn available(&self) -> i64 {
        (self.count - self.count_booked).max(0)
    }
}

/// Static display template paired with a live item by id
#[derive(Debug, Clone)]
pub struct CatalogTemplate {
    pub id: i64,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static [(&'static str, &'static str)],
    pub fallback_price: &'static str,
    /// Gender restriction shown on accommodation cards
    pub gender: Option<&'static str>,
}

/// The pass display templates shipped with the client
pub fn pass_templates() -> Vec<CatalogTemplate> {
    vec![
        CatalogTemplate {
            id: 1,
            title: "THE FLASH PASS",
            subtitle: "Flexibility on the Go",
            details: &[
                ("On the Fly", "Entry to specific on-spot events, fun zone activities, and mini-games."),
                ("Best for", "The casual visitors looking for quick fun and impulsive challenges."),
            ],
            fallback_price: "Event wise",
            gender: None,
        },
        CatalogTemplate {
            id: 2,
            title: "THE MVP PASS",
            subtitle: "The full AB Experience",
            details: &[
                ("All-Access", "Registration fees for All competitions."),
                ("The Big Nights", "Entry to all Pronites and Pro-shows (3 Days)"),
                ("The Swag", "Official Abhivyakti '26 Limited Edition Merch."),
                ("Best for", "The hardcore participants who want to own the stage and the nights."),
            ],
            fallback_price: "₹1199",
            gender: None,
        },
        CatalogTemplate {
            id: 3,
            title: "HEADLINERS PASS",
            subtitle: "For the fans of the Big Stage",
            details: &[
                ("The Big Nights", "Entry to all Pronites and Pro-shows (Concert, DJ Night, Comedy)"),
                ("Best for", "The vibe-seekers who are here for the energy and the artists."),
            ],
            fallback_price: "₹599",
            gender: None,
        },
    ]
}

/// The accommodation display templates shipped with the client
pub fn accommodation_templates() -> Vec<CatalogTemplate> {
    vec![
        CatalogTemplate {
            id: 1,
            title: "THE CLUB STAY",
            subtitle: "",
            details: &[(
                "",
                "Private Double or 4-person sharing rooms. Air-Conditioned (AC), attached private washrooms. Food charges applicable (optional add-on).",
            )],
            fallback_price: "₹1199",
            gender: Some("Boys Only"),
        },
        CatalogTemplate {
            id: 2,
            title: "THE BASECAMP",
            subtitle: "",
            details: &[(
                "",
                "Common hall arrangement (floor bedding). Shared washrooms, non-AC ventilation. Food not included (available at food stalls/mess).",
            )],
            fallback_price: "₹1199",
            gender: Some("Boys Only"),
        },
        CatalogTemplate {
            id: 3,
            title: "THE CLUB STAY",
            subtitle: "",
            details: &[(
                "",
                "Private Double or 4-person sharing rooms. Air-Conditioned (AC), attached private washrooms. Food charges applicable (optional add-on).",
            )],
            fallback_price: "₹1199",
            gender: Some("Girls Only"),
        },
    ]
}
