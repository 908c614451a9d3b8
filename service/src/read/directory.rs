//! Partner [`Directory`] read model.

use std::{collections::HashMap, convert::Infallible, str::FromStr};

use itertools::Itertools as _;

#[cfg(doc)]
use crate::domain::partner::Category;
use crate::domain::{partner, Partner};

use super::realtime::{Event, Kind, Table};

/// Partner directory, reconciled with change [`Event`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Directory {
    /// Partner [`Category`]s ordered by name.
    categories: Vec<partner::Category>,

    /// All [`Partner`]s.
    partners: Vec<Partner>,
}

impl Directory {
    /// Creates a new [`Directory`] out of the provided [`Category`]s and
    /// [`Partner`]s.
    #[must_use]
    pub fn new(
        categories: Vec<partner::Category>,
        partners: Vec<Partner>,
    ) -> Self {
        let mut dir = Self {
            categories,
            partners,
        };
        dir.sort();
        dir
    }

    /// Returns the [`Category`]s of this [`Directory`] ordered by name.
    #[must_use]
    pub fn categories(&self) -> &[partner::Category] {
        &self.categories
    }

    /// Returns all the [`Partner`]s of this [`Directory`].
    #[must_use]
    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    /// Applies the provided change [`Event`] to this [`Directory`].
    ///
    /// [`Event`]s of unrelated tables and undecodable rows are ignored.
    #[must_use]
    pub fn apply(mut self, event: &Event) -> Self {
        match event.table {
            Table::Categories => {
                upsert_or_remove(&mut self.categories, event, |c| &c.id);
                self.sort();
            }
            Table::Partners => {
                upsert_or_remove(&mut self.partners, event, |p| &p.id);
            }
            Table::UserProfiles | Table::FamilyMembers | Table::Other => {}
        }
        self
    }

    /// Renders a [`View`] of this [`Directory`] narrowed by the provided
    /// [`Filter`].
    #[must_use]
    pub fn view(&self, filter: &Filter) -> View {
        let names = self
            .categories
            .iter()
            .map(|c| (&c.id, c.name.as_str()))
            .collect::<HashMap<_, _>>();
        let counts = self.partners.iter().counts_by(|p| &p.category_id);

        let categories = self
            .categories
            .iter()
            .map(|c| CategoryEntry {
                category: c.clone(),
                partner_count: counts.get(&c.id).copied().unwrap_or_default(),
            })
            .collect();

        let partners = self
            .partners
            .iter()
            .filter(|p| filter.matches(&p.category_id))
            .filter_map(|p| {
                Some(Listing {
                    category_name: (*names.get(&p.category_id)?).to_owned(),
                    city: p.location_city.to_lowercase(),
                    partner: p.clone(),
                })
            })
            .collect();

        View {
            categories,
            partners,
        }
    }

    /// Keeps [`Category`]s ordered by name.
    fn sort(&mut self) {
        self.categories.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// Upserts or removes the row of the provided [`Event`] in the `rows`.
fn upsert_or_remove<T, Id>(
    rows: &mut Vec<T>,
    event: &Event,
    id: impl Fn(&T) -> &Id,
) where
    T: serde::de::DeserializeOwned,
    Id: serde::de::DeserializeOwned + PartialEq,
{
    match event.kind {
        Kind::Insert | Kind::Update => {
            let Some(row) = event.row::<T>() else {
                return;
            };
            if let Some(existing) = rows.iter_mut().find(|r| id(r) == id(&row))
            {
                *existing = row;
            } else {
                rows.push(row);
            }
        }
        Kind::Delete => {
            if let Some(deleted) = event.id::<Id>() {
                rows.retain(|r| *id(r) != deleted);
            }
        }
    }
}

/// Filter of a [`Directory`] [`View`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Filter {
    /// Every [`Partner`].
    #[default]
    All,

    /// [`Partner`]s of a single [`Category`] only.
    Category(partner::CategoryId),
}

impl Filter {
    /// Indicates whether this [`Filter`] lets through [`Partner`]s of the
    /// provided [`Category`].
    #[must_use]
    pub fn matches(&self, category: &partner::CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => id == category,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "all" => Self::All,
            id => Self::Category(id.into()),
        })
    }
}

/// [`Category`] in a [`View`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryEntry {
    /// [`Category`] itself.
    pub category: partner::Category,

    /// Number of [`Partner`]s in this [`Category`], regardless of the
    /// [`Filter`].
    pub partner_count: usize,
}

/// [`Partner`] in a [`View`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// [`Partner`] itself.
    pub partner: Partner,

    /// Name of the [`Category`] the [`Partner`] belongs to.
    pub category_name: String,

    /// Lowercased city the [`Partner`] is located in.
    pub city: String,
}

/// Rendered [`Directory`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct View {
    /// All [`Category`]s with their [`Partner`] counts.
    pub categories: Vec<CategoryEntry>,

    /// [`Partner`]s passing the [`Filter`].
    ///
    /// [`Partner`]s of unknown [`Category`]s are omitted.
    pub partners: Vec<Listing>,
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;

    use crate::{
        domain::{partner, Partner},
        read::realtime::Event,
    };

    use super::{Directory, Filter};

    fn category(id: &str, name: &str) -> partner::Category {
        partner::Category {
            id: id.into(),
            name: name.into(),
            icon: "star".into(),
            discount_range: "10% - 20%".into(),
            color: "#000".into(),
        }
    }

    fn partner(name: &str, category: &str) -> Partner {
        Partner {
            id: partner::Id::new(),
            name: name.into(),
            category_id: category.into(),
            logo_url: String::new(),
            logo_alt: String::new(),
            discount_percentage: Percent::new(Decimal::from(15)).unwrap(),
            address: String::new(),
            phone: String::new(),
            google_maps_location: None,
            location_city: "Riyadh".into(),
            special_terms: None,
            is_featured: false,
        }
    }

    fn directory() -> Directory {
        Directory::new(
            vec![category("food", "مطاعم"), category("med", "صحة")],
            vec![
                partner("A", "food"),
                partner("B", "food"),
                partner("C", "med"),
                partner("D", "gone"),
            ],
        )
    }

    #[test]
    fn counts_partners_per_category() {
        let view = directory().view(&Filter::All);
        let counts = view
            .categories
            .iter()
            .map(|c| (c.category.id.as_ref(), c.partner_count))
            .collect::<Vec<_>>();
        assert_eq!(counts, [("med", 1), ("food", 2)]);
        assert_eq!(view.partners.len(), 3);
        assert_eq!(view.partners[0].category_name, "مطاعم");
        assert_eq!(view.partners[0].city, "riyadh");
    }

    #[test]
    fn filters_by_category() {
        let filter = "med".parse::<Filter>().unwrap();
        let view = directory().view(&filter);
        assert_eq!(view.partners.len(), 1);
        assert_eq!(view.partners[0].partner.name, "C");
        assert_eq!(view.categories.len(), 2);

        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    }

    #[test]
    fn reconciles_partner_events() {
        let dir = directory();
        let b = dir.partners()[1].clone();

        let mut updated = b.clone();
        updated.category_id = "med".into();
        let dir = dir.apply(&Event::from_payload(&format!(
            r#"{{"table": "partners", "eventType": "UPDATE", "new": {}}}"#,
            serde_json::to_string(&updated).unwrap(),
        ))
        .unwrap());
        assert_eq!(dir.partners().len(), 4);
        assert_eq!(dir.partners()[1].category_id.as_ref(), "med");

        let dir = dir.apply(&Event::from_payload(&format!(
            r#"{{"table": "partners", "eventType": "DELETE", "old": {{"id": "{}"}}}}"#,
            b.id,
        ))
        .unwrap());
        assert_eq!(dir.partners().len(), 3);
        assert!(dir.partners().iter().all(|p| p.id != b.id));
    }

    #[test]
    fn keeps_categories_ordered() {
        let dir = directory().apply(
            &Event::from_payload(
                r##"{"table": "categories", "eventType": "INSERT", "new": {
                    "id": "cafe",
                    "name": "حلويات",
                    "icon": "cake",
                    "discount_range": "15%",
                    "color": "#fff"
                }}"##,
            )
            .unwrap(),
        );
        let names = dir
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["حلويات", "صحة", "مطاعم"]);
    }

    #[test]
    fn ignores_unrelated_events() {
        let dir = directory();
        let applied = dir.clone().apply(
            &Event::from_payload(
                r#"{"table": "family_members", "eventType": "INSERT", "new": {}}"#,
            )
            .unwrap(),
        );
        assert_eq!(applied, dir);
    }
}
