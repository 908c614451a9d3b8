//! [`Command`] for removing a family [`Member`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::member::family::Member;
use crate::{
    domain::member::{self, family},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a family [`Member`] from a card.
#[derive(Clone, Copy, Debug)]
pub struct RemoveFamilyMember {
    /// ID of the card holder.
    pub holder_id: member::Id,

    /// ID of the family [`Member`] to remove.
    pub id: family::Id,
}

impl<Db> Command<RemoveFamilyMember> for Service<Db>
where
    Db: Database<
        Delete<By<Option<family::Member>, (family::Id, member::Id)>>,
        Ok = Option<family::Member>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = family::Member;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        RemoveFamilyMember { holder_id, id }: RemoveFamilyMember,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        // Family members of other holders are reported as missing.
        let removed = self
            .database()
            .execute(Delete(By::new((id, holder_id))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::FamilyMemberNotExists(id))
            .map_err(tracerr::wrap!())?;

        tracing::info!(
            holder_id = %holder_id,
            family_member_id = %id,
            "family member removed",
        );

        Ok(removed)
    }
}

/// Error of [`RemoveFamilyMember`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// Family [`Member`] doesn't exist or belongs to another holder.
    #[display("`FamilyMember(id: {_0})` does not exist")]
    #[from(ignore)]
    FamilyMemberNotExists(#[error(not(source))] family::Id),
}

#[cfg(test)]
mod spec {
    use std::sync::Mutex;

    use common::{
        operations::{By, Delete},
        DateTime, Handler,
    };
    use tracerr::Traced;

    use crate::{
        domain::member::{self, family},
        infra::database,
        spec,
    };

    use super::{ExecutionError, RemoveFamilyMember};

    struct Db(Mutex<Vec<family::Member>>);

    impl Handler<Delete<By<Option<family::Member>, (family::Id, member::Id)>>>
        for Db
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
            let mut rows = self.0.lock().unwrap();
            let pos = rows
                .iter()
                .position(|m| m.id == id && m.holder_id == holder_id);
            Ok(pos.map(|i| rows.remove(i)))
        }
    }

    fn member(holder_id: member::Id) -> family::Member {
        family::Member {
            id: family::Id::new(),
            holder_id,
            name: family::Name::new("ريم").unwrap(),
            relationship: None,
            phone: None,
            email: None,
            is_active: true,
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    #[tokio::test]
    async fn removes_own_member_only() {
        let holder = member::Id::from(uuid::Uuid::new_v4());
        let stranger = member::Id::from(uuid::Uuid::new_v4());
        let own = member(holder);
        let svc = spec::service(Db(Mutex::new(vec![own.clone()])));

        let err = svc
            .execute(RemoveFamilyMember {
                holder_id: stranger,
                id: own.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::FamilyMemberNotExists(_),
        ));

        let removed = svc
            .execute(RemoveFamilyMember {
                holder_id: holder,
                id: own.id,
            })
            .await
            .unwrap();
        assert_eq!(removed, own);
        assert!(svc.database().0.lock().unwrap().is_empty());
    }
}
