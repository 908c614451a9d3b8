//! [`Command`] for adding a family [`Member`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::member::family::Member;
use crate::{
    domain::{
        member::{self, family},
        Member as Holder,
    },
    infra::{database, Database},
    read::dashboard::FamilyCount,
    Service,
};

use super::Command;

/// [`Command`] for adding a new family [`Member`] to a card.
#[derive(Clone, Debug)]
pub struct AddFamilyMember {
    /// ID of the card holder.
    pub holder_id: member::Id,

    /// [`family::Name`] of the new family [`Member`].
    pub name: family::Name,
}

impl<Db> Command<AddFamilyMember> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Holder, member::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Holder>, member::Id>>,
            Ok = Option<Holder>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<FamilyCount, member::Id>>,
            Ok = FamilyCount,
            Err = Traced<database::Error>,
        > + Database<
            Insert<family::Member>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = family::Member;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddFamilyMember,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddFamilyMember { holder_id, name } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Serialize concurrent additions to the same card.
        tx.execute(Lock(By::new(holder_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let holder = tx
            .execute(Select(By::<Option<Holder>, _>::new(holder_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HolderNotExists(holder_id))
            .map_err(tracerr::wrap!())?;
        let tier = holder
            .tier
            .ok_or(E::NoCard(holder_id))
            .map_err(tracerr::wrap!())?;

        let count = tx
            .execute(Select(By::<FamilyCount, _>::new(holder_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let max = family::max_members(tier);
        if usize::try_from(u32::from(count)).unwrap_or(usize::MAX) >= max {
            return Err(tracerr::new!(E::LimitReached(max)));
        }

        let member = family::Member {
            id: family::Id::new(),
            holder_id,
            name,
            relationship: None,
            phone: None,
            email: None,
            is_active: true,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(member.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tracing::info!(
            holder_id = %holder_id,
            family_member_id = %member.id,
            "family member added",
        );

        Ok(member)
    }
}

/// Error of [`AddFamilyMember`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// Card holder doesn't exist.
    #[display("`Member(id: {_0})` does not exist")]
    #[from(ignore)]
    HolderNotExists(#[error(not(source))] member::Id),

    /// Card holder has no card issued.
    #[display("`Member(id: {_0})` has no card")]
    #[from(ignore)]
    NoCard(#[error(not(source))] member::Id),

    /// Card already covers the maximum number of family [`Member`]s.
    #[display("Card already covers {_0} family members")]
    #[from(ignore)]
    LimitReached(#[error(not(source))] usize),
}

#[cfg(test)]
mod spec {
    use std::sync::Mutex;

    use common::{
        operations::{By, Commit, Insert, Lock, Select, Transact},
        DateTime, Handler,
    };
    use tracerr::Traced;

    use crate::{
        domain::{
            member::{self, family},
            Member, Tier,
        },
        infra::database,
        read::dashboard::FamilyCount,
        spec,
    };

    use super::{AddFamilyMember, ExecutionError};

    #[derive(Default)]
    struct Db {
        tier: Option<Tier>,
        family: Mutex<Vec<family::Member>>,
        committed: Mutex<bool>,
    }

    impl Handler<Transact> for &Db {
        type Ok = Self;
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
            Ok(*self)
        }
    }

    impl Handler<Lock<By<Member, member::Id>>> for &Db {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Lock<By<Member, member::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    impl Handler<Select<By<Option<Member>, member::Id>>> for &Db {
        type Ok = Option<Member>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Option<Member>, member::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Some(Member {
                id: by.into_inner(),
                email: None,
                full_name: None,
                phone: None,
                address: None,
                city: None,
                work_at: None,
                card_image: None,
                tier: self.tier,
                membership_start_date: None,
                membership_expiry_date: None,
                is_active: true,
                created_at: DateTime::UNIX_EPOCH.coerce(),
            }))
        }
    }

    impl Handler<Select<By<FamilyCount, member::Id>>> for &Db {
        type Ok = FamilyCount;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<FamilyCount, member::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            let len = self.family.lock().unwrap().len();
            Ok(FamilyCount::from(u32::try_from(len).unwrap()))
        }
    }

    impl Handler<Insert<family::Member>> for &Db {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(m): Insert<family::Member>,
        ) -> Result<Self::Ok, Self::Err> {
            self.family.lock().unwrap().push(m);
            Ok(())
        }
    }

    impl Handler<Commit> for &Db {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
            *self.committed.lock().unwrap() = true;
            Ok(())
        }
    }

    fn add(name: &str) -> AddFamilyMember {
        AddFamilyMember {
            holder_id: member::Id::default(),
            name: family::Name::new(name).unwrap(),
        }
    }

    #[tokio::test]
    async fn adds_until_card_is_full() {
        let db = Db {
            tier: Some(Tier::Family),
            ..Db::default()
        };
        let svc = spec::service(&db);

        for i in 0..family::max_members(Tier::Family) {
            let m = svc.execute(add(&format!("فرد {i}"))).await.unwrap();
            assert!(m.is_active);
        }
        assert!(*db.committed.lock().unwrap());

        let err = svc.execute(add("زائد")).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::LimitReached(5)));
        assert_eq!(db.family.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn requires_card() {
        let db = Db::default();
        let err = spec::service(&db).execute(add("خالد")).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::NoCard(_)));
    }
}
