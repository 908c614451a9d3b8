//! [`Query`] of a member [`Dashboard`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{member, Member},
    infra::{database, Database},
    read::{dashboard::FamilyCount, Dashboard},
    Service,
};

use super::Query;

/// [`Query`] of the [`Dashboard`] of the signed-in [`Member`].
#[derive(Clone, Copy, Debug)]
pub struct MyDashboard {
    /// ID of the signed-in [`Member`].
    pub member_id: member::Id,
}

impl<Db> Query<MyDashboard> for Service<Db>
where
    Db: Database<
            Select<By<Option<Member>, member::Id>>,
            Ok = Option<Member>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<FamilyCount, member::Id>>,
            Ok = FamilyCount,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Dashboard;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        MyDashboard { member_id }: MyDashboard,
    ) -> Result<Self::Ok, Self::Err> {
        let profile = self
            .database()
            .execute(Select(By::<Option<Member>, _>::new(member_id)))
            .await
            .map_err(tracerr::wrap!())?;
        let family_count = self
            .database()
            .execute(Select(By::<FamilyCount, _>::new(member_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(Dashboard {
            member_id,
            profile,
            family_count,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        DateTime, Handler,
    };
    use tracerr::Traced;

    use crate::{
        domain::{member, Member},
        infra::database,
        read::dashboard::FamilyCount,
        spec,
    };

    use super::MyDashboard;

    struct Db(Option<Member>);

    impl Handler<Select<By<Option<Member>, member::Id>>> for Db {
        type Ok = Option<Member>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Option<Member>, member::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            let id = by.into_inner();
            Ok(self.0.clone().filter(|m| m.id == id))
        }
    }

    impl Handler<Select<By<FamilyCount, member::Id>>> for Db {
        type Ok = FamilyCount;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<FamilyCount, member::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(FamilyCount::from(3))
        }
    }

    fn member() -> Member {
        Member {
            id: member::Id::from(uuid::Uuid::new_v4()),
            email: None,
            full_name: None,
            phone: None,
            address: None,
            city: None,
            work_at: None,
            card_image: None,
            tier: None,
            membership_start_date: None,
            membership_expiry_date: None,
            is_active: true,
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn collects_profile_and_family_count() {
        let m = member();
        let d = spec::service(Db(Some(m.clone())))
            .execute(MyDashboard { member_id: m.id })
            .await
            .unwrap();
        assert_eq!(d.profile, Some(m));
        assert_eq!(u32::from(d.family_count), 3);
    }

    #[tokio::test]
    async fn tolerates_missing_profile() {
        let d = spec::service(Db(Some(member())))
            .execute(MyDashboard {
                member_id: member().id,
            })
            .await
            .unwrap();
        assert_eq!(d.profile, None);
    }
}
