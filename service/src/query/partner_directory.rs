//! [`Query`] of the partner [`Directory`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{partner, Partner},
    infra::{database, Database},
    read::{
        directory::{Filter, View},
        Directory,
    },
    Service,
};

use super::Query;

/// [`Query`] rendering a [`View`] of the partner [`Directory`].
#[derive(Clone, Debug, Default)]
pub struct PartnerDirectory {
    /// [`Filter`] to narrow the listed [`Partner`]s with.
    pub filter: Filter,
}

impl<Db> Query<PartnerDirectory> for Service<Db>
where
    Db: Database<
            Select<By<Vec<partner::Category>, ()>>,
            Ok = Vec<partner::Category>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Partner>, ()>>,
            Ok = Vec<Partner>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = View;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        PartnerDirectory { filter }: PartnerDirectory,
    ) -> Result<Self::Ok, Self::Err> {
        let categories = self
            .database()
            .execute(Select(By::<Vec<partner::Category>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        let partners = self
            .database()
            .execute(Select(By::<Vec<Partner>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(Directory::new(categories, partners).view(&filter))
    }
}
