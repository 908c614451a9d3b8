//! [`Partner`]-related [`Database`] implementations.

use common::{
    operations::{By, Select},
    Percent,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{partner, Partner},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C> Database<Select<By<Vec<partner::Category>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<partner::Category>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<partner::Category>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, icon, discount_range, color \
            FROM categories \
            ORDER BY name";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| partner::Category {
                id: row.get("id"),
                name: row.get("name"),
                icon: row.get("icon"),
                discount_range: row.get("discount_range"),
                color: row.get("color"),
            })
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Partner>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Partner>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Partner>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, category_id, \
                   logo_url, logo_alt, \
                   discount_percentage, \
                   address, phone, \
                   google_maps_location, location_city, \
                   special_terms, is_featured \
            FROM partners \
            ORDER BY is_featured DESC, name";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .filter_map(|row| {
                let id: partner::Id = row.get("id");
                let raw: Decimal = row.get("discount_percentage");
                let Some(discount_percentage) = Percent::new(raw) else {
                    tracing::warn!(
                        partner_id = %id,
                        discount = %raw,
                        "skipping `Partner` with invalid discount",
                    );
                    return None;
                };
                Some(Partner {
                    id,
                    name: row.get("name"),
                    category_id: row.get("category_id"),
                    logo_url: row.get("logo_url"),
                    logo_alt: row.get("logo_alt"),
                    discount_percentage,
                    address: row.get("address"),
                    phone: row.get("phone"),
                    google_maps_location: row.get("google_maps_location"),
                    location_city: row.get("location_city"),
                    special_terms: row.get("special_terms"),
                    is_featured: row.get("is_featured"),
                })
            })
            .collect())
    }
}
