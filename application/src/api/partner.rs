//! Partner directory-related definitions.

use common::Percent;
use derive_more::{Display, From, Into};
use juniper::{GraphQLObject, GraphQLScalar};
use service::{domain::partner, read::directory};
use uuid::Uuid;

/// Unique identifier of a `Partner`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(partner::Id)]
#[into(partner::Id)]
#[graphql(name = "PartnerId", transparent)]
pub struct Id(Uuid);

/// Category grouping `Partner`s in the directory.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "PartnerCategory")]
pub struct Category {
    /// Unique identifier of this `PartnerCategory`.
    pub id: String,

    /// Name of this `PartnerCategory`.
    pub name: String,

    /// Name of the icon representing this `PartnerCategory`.
    pub icon: String,

    /// Human-readable range of discounts given in this `PartnerCategory`.
    pub discount_range: String,

    /// Color this `PartnerCategory` is highlighted with.
    pub color: String,

    /// Number of `Partner`s in this `PartnerCategory`.
    pub partner_count: i32,
}

impl From<directory::CategoryEntry> for Category {
    fn from(entry: directory::CategoryEntry) -> Self {
        let directory::CategoryEntry {
            category:
                partner::Category {
                    id,
                    name,
                    icon,
                    discount_range,
                    color,
                },
            partner_count,
        } = entry;
        Self {
            id: id.into(),
            name,
            icon,
            discount_range,
            color,
            partner_count: i32::try_from(partner_count).unwrap_or(i32::MAX),
        }
    }
}

/// Business giving discounts to card holders.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Partner {
    /// Unique identifier of this `Partner`.
    pub id: Id,

    /// Name of this `Partner`.
    pub name: String,

    /// ID of the `PartnerCategory` this `Partner` belongs to.
    pub category_id: String,

    /// Name of the `PartnerCategory` this `Partner` belongs to.
    pub category_name: String,

    /// URL of this `Partner`'s logo.
    pub logo_url: String,

    /// Alternative text of this `Partner`'s logo.
    pub logo_alt: String,

    /// Discount this `Partner` gives to card holders.
    pub discount_percentage: Percent,

    /// Street address of this `Partner`.
    pub address: String,

    /// Phone number of this `Partner`.
    pub phone: String,

    /// Google Maps link to this `Partner`'s location.
    pub google_maps_location: Option<String>,

    /// Lowercased city this `Partner` is located in.
    pub city: String,

    /// Special terms of this `Partner`'s discount.
    pub special_terms: Option<String>,

    /// Indicator whether this `Partner` is featured.
    pub is_featured: bool,
}

impl From<directory::Listing> for Partner {
    fn from(listing: directory::Listing) -> Self {
        let directory::Listing {
            partner,
            category_name,
            city,
        } = listing;
        Self {
            id: partner.id.into(),
            name: partner.name,
            category_id: partner.category_id.into(),
            category_name,
            logo_url: partner.logo_url,
            logo_alt: partner.logo_alt,
            discount_percentage: partner.discount_percentage,
            address: partner.address,
            phone: partner.phone,
            google_maps_location: partner.google_maps_location,
            city,
            special_terms: partner.special_terms,
            is_featured: partner.is_featured,
        }
    }
}

/// Partner directory narrowed by a `PartnerCategory`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "PartnerDirectory")]
pub struct Directory {
    /// Every `PartnerCategory` along with its `Partner`s count.
    pub categories: Vec<Category>,

    /// `Partner`s matching the requested `PartnerCategory`.
    pub partners: Vec<Partner>,
}

impl From<directory::View> for Directory {
    fn from(view: directory::View) -> Self {
        Self {
            categories: view.categories.into_iter().map(Into::into).collect(),
            partners: view.partners.into_iter().map(Into::into).collect(),
        }
    }
}
