//! [`Member`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Lock, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        member::{self, family},
        Member,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::dashboard::FamilyCount,
};

impl<C> Database<Select<By<Option<Member>, member::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Member>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Member>, member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: member::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, email, full_name, \
                   phone, address, city, \
                   work_at, card_image, card_type, \
                   membership_start_date, membership_expiry_date, \
                   is_active, created_at \
            FROM user_profiles \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Member {
                id: row.get("id"),
                email: row.get("email"),
                full_name: row.get("full_name"),
                phone: row.get("phone"),
                address: row.get("address"),
                city: row.get("city"),
                work_at: row.get("work_at"),
                card_image: row.get("card_image"),
                tier: row.get("card_type"),
                membership_start_date: row.get("membership_start_date"),
                membership_expiry_date: row.get("membership_expiry_date"),
                is_active: row.get("is_active"),
                created_at: row.get("created_at"),
            }))
    }
}

impl<C> Database<Lock<By<Member, member::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Member, member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id: member::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM user_profiles \
            WHERE id = $1::UUID \
            FOR UPDATE";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<FamilyCount, member::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = FamilyCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<FamilyCount, member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let holder_id: member::Id = by.into_inner();

        const SQL: &str = "\
            SELECT COUNT(*) AS total \
            FROM family_members \
            WHERE user_id = $1::UUID \
              AND is_active";
        let total: i64 = self
            .query_opt(SQL, &[&holder_id])
            .await
            .map_err(tracerr::wrap!())?
            .map_or(0, |row| row.get("total"));
        Ok(FamilyCount::from(u32::try_from(total).unwrap_or(u32::MAX)))
    }
}

impl<C> Database<Select<By<Vec<family::Member>, member::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<family::Member>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<family::Member>, member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let holder_id: member::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, user_id, member_name, \
                   relationship, phone, email, \
                   is_active, created_at \
            FROM family_members \
            WHERE user_id = $1::UUID \
              AND is_active \
            ORDER BY created_at ASC";
        Ok(self
            .query(SQL, &[&holder_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(family_member)
            .collect())
    }
}

impl<C> Database<Insert<family::Member>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(member): Insert<family::Member>,
    ) -> Result<Self::Ok, Self::Err> {
        let family::Member {
            id,
            holder_id,
            name,
            relationship,
            phone,
            email,
            is_active,
            created_at,
        } = member;

        const SQL: &str = "\
            INSERT INTO family_members (\
                id, user_id, member_name, \
                relationship, phone, email, \
                is_active, created_at\
            ) \
            VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, \
                $4::VARCHAR, $5::VARCHAR, $6::VARCHAR, \
                $7::BOOLEAN, $8::TIMESTAMPTZ\
            )";
        self.exec(
            SQL,
            &[
                &id,
                &holder_id,
                &name,
                &relationship,
                &phone,
                &email,
                &is_active,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C>
    Database<Delete<By<Option<family::Member>, (family::Id, member::Id)>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<family::Member>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<
            By<Option<family::Member>, (family::Id, member::Id)>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, holder_id) = by.into_inner();

        const SQL: &str = "\
            DELETE FROM family_members \
            WHERE id = $1::UUID \
              AND user_id = $2::UUID \
            RETURNING id, user_id, member_name, \
                      relationship, phone, email, \
                      is_active, created_at";
        Ok(self
            .query_opt(SQL, &[&id, &holder_id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(family_member))
    }
}

/// Reads a family [`Member`] out of the provided [`Row`].
///
/// [`Member`]: family::Member
fn family_member(row: &Row) -> family::Member {
    family::Member {
        id: row.get("id"),
        holder_id: row.get("user_id"),
        name: row.get("member_name"),
        relationship: row.get("relationship"),
        phone: row.get("phone"),
        email: row.get("email"),
        is_active: row.get("is_active"),
        created_at: row.get("created_at"),
    }
}
