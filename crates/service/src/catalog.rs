//! Craft taxonomy reconciliation.
//!
//! The database converges exactly to the static catalog below: crafts and
//! sub-crafts present in the catalog are upserted by slug, everything else is
//! deleted. Planning is a pure desired-vs-current diff so repeated runs are
//! idempotent; only the executor touches the database.

use std::collections::{HashMap, HashSet};

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;
use uuid::Uuid;

use models::{craft, sub_craft};

use crate::errors::ServiceError;

pub struct CatalogCraft {
    pub name: &'static str,
    pub sub_crafts: &'static [&'static str],
}

/// Desired craft taxonomy. The sync job makes the database match this
/// catalog exactly, regardless of starting state.
pub const CRAFT_CATALOG: &[CatalogCraft] = &[
    CatalogCraft {
        name: "Wood Carving",
        sub_crafts: &["Walnut Wood Carving", "Lattice Work"],
    },
    CatalogCraft {
        name: "Papier Mache",
        sub_crafts: &["Naqashi", "Sakhta Making"],
    },
    CatalogCraft {
        name: "Weaving",
        sub_crafts: &["Kani Weaving", "Carpet Weaving", "Pashmina Shawl"],
    },
    CatalogCraft {
        name: "Embroidery",
        sub_crafts: &["Sozni Embroidery", "Aari Embroidery", "Crewel Embroidery"],
    },
    CatalogCraft {
        name: "Metal Work",
        sub_crafts: &["Copperware", "Silverware"],
    },
];

/// Deterministic slug from a display name: lowercase, runs of
/// non-alphanumerics collapse to single dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

pub fn sub_craft_slug(craft_slug: &str, sub_craft_name: &str) -> String {
    format!("{}-{}", craft_slug, slugify(sub_craft_name))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftRow {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCraftRow {
    pub slug: String,
    pub name: String,
    pub craft_slug: String,
}

/// Writes required to converge the current taxonomy to the catalog.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub craft_upserts: Vec<CraftRow>,
    pub sub_craft_upserts: Vec<SubCraftRow>,
    pub sub_craft_deletes: Vec<String>,
    pub craft_deletes: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.craft_upserts.is_empty()
            && self.sub_craft_upserts.is_empty()
            && self.sub_craft_deletes.is_empty()
            && self.craft_deletes.is_empty()
    }
}

/// Pure diff of the desired catalog against the current rows.
pub fn plan_sync(
    catalog: &[CatalogCraft],
    current_crafts: &[CraftRow],
    current_sub_crafts: &[SubCraftRow],
) -> SyncPlan {
    let craft_by_slug: HashMap<&str, &CraftRow> =
        current_crafts.iter().map(|c| (c.slug.as_str(), c)).collect();
    let sub_by_slug: HashMap<&str, &SubCraftRow> =
        current_sub_crafts.iter().map(|s| (s.slug.as_str(), s)).collect();

    let mut plan = SyncPlan::default();
    let mut desired_crafts = HashSet::new();
    let mut desired_subs = HashSet::new();

    for entry in catalog {
        let craft_slug = slugify(entry.name);
        match craft_by_slug.get(craft_slug.as_str()) {
            Some(existing) if existing.name == entry.name => {}
            _ => plan.craft_upserts.push(CraftRow { slug: craft_slug.clone(), name: entry.name.into() }),
        }

        for sub_name in entry.sub_crafts {
            let sub_slug = sub_craft_slug(&craft_slug, sub_name);
            let up_to_date = sub_by_slug
                .get(sub_slug.as_str())
                .is_some_and(|s| s.name == *sub_name && s.craft_slug == craft_slug);
            if !up_to_date {
                plan.sub_craft_upserts.push(SubCraftRow {
                    slug: sub_slug.clone(),
                    name: (*sub_name).into(),
                    craft_slug: craft_slug.clone(),
                });
            }
            desired_subs.insert(sub_slug);
        }
        desired_crafts.insert(craft_slug);
    }

    for sub in current_sub_crafts {
        if !desired_subs.contains(&sub.slug) {
            plan.sub_craft_deletes.push(sub.slug.clone());
        }
    }
    for craft in current_crafts {
        if !desired_crafts.contains(&craft.slug) {
            plan.craft_deletes.push(craft.slug.clone());
        }
    }
    plan
}

#[derive(Debug, Default)]
pub struct SyncSummary {
    pub crafts_upserted: usize,
    pub sub_crafts_upserted: usize,
    pub sub_crafts_deleted: usize,
    pub crafts_deleted: usize,
}

/// Reconcile the database taxonomy with [`CRAFT_CATALOG`].
pub async fn sync_crafts(db: &DatabaseConnection) -> Result<SyncSummary, ServiceError> {
    let crafts = craft::Entity::find().all(db).await.map_err(ServiceError::from_db)?;
    let sub_crafts = sub_craft::Entity::find().all(db).await.map_err(ServiceError::from_db)?;

    let craft_id_by_slug: HashMap<String, Uuid> =
        crafts.iter().map(|c| (c.craft_slug.clone(), c.craft_id)).collect();
    let craft_slug_by_id: HashMap<Uuid, String> =
        crafts.iter().map(|c| (c.craft_id, c.craft_slug.clone())).collect();

    let current_crafts: Vec<CraftRow> = crafts
        .iter()
        .map(|c| CraftRow { slug: c.craft_slug.clone(), name: c.craft_name.clone() })
        .collect();
    let current_subs: Vec<SubCraftRow> = sub_crafts
        .iter()
        .map(|s| SubCraftRow {
            slug: s.sub_craft_slug.clone(),
            name: s.sub_craft_name.clone(),
            craft_slug: craft_slug_by_id.get(&s.craft_id).cloned().unwrap_or_default(),
        })
        .collect();

    let plan = plan_sync(CRAFT_CATALOG, &current_crafts, &current_subs);
    let mut summary = SyncSummary::default();
    if plan.is_empty() {
        info!("craft catalog already in sync");
        return Ok(summary);
    }

    let mut craft_ids = craft_id_by_slug;
    for row in &plan.craft_upserts {
        match craft_ids.get(&row.slug) {
            Some(existing_id) => {
                let mut am: craft::ActiveModel = craft::Entity::find_by_id(*existing_id)
                    .one(db)
                    .await
                    .map_err(ServiceError::from_db)?
                    .ok_or_else(|| ServiceError::not_found("craft"))?
                    .into();
                am.craft_name = Set(row.name.clone());
                am.update(db).await.map_err(ServiceError::from_db)?;
            }
            None => {
                let created = craft::ActiveModel {
                    craft_id: Set(Uuid::new_v4()),
                    craft_name: Set(row.name.clone()),
                    craft_slug: Set(row.slug.clone()),
                }
                .insert(db)
                .await
                .map_err(ServiceError::from_db)?;
                craft_ids.insert(row.slug.clone(), created.craft_id);
            }
        }
        summary.crafts_upserted += 1;
    }

    let sub_id_by_slug: HashMap<String, Uuid> = sub_crafts
        .iter()
        .map(|s| (s.sub_craft_slug.clone(), s.sub_craft_id))
        .collect();
    for row in &plan.sub_craft_upserts {
        let craft_id = craft_ids
            .get(&row.craft_slug)
            .copied()
            .ok_or_else(|| ServiceError::not_found("craft"))?;
        match sub_id_by_slug.get(&row.slug) {
            Some(existing_id) => {
                let mut am: sub_craft::ActiveModel = sub_craft::Entity::find_by_id(*existing_id)
                    .one(db)
                    .await
                    .map_err(ServiceError::from_db)?
                    .ok_or_else(|| ServiceError::not_found("sub craft"))?
                    .into();
                am.sub_craft_name = Set(row.name.clone());
                am.craft_id = Set(craft_id);
                am.update(db).await.map_err(ServiceError::from_db)?;
            }
            None => {
                sub_craft::ActiveModel {
                    sub_craft_id: Set(Uuid::new_v4()),
                    sub_craft_name: Set(row.name.clone()),
                    sub_craft_slug: Set(row.slug.clone()),
                    craft_id: Set(craft_id),
                }
                .insert(db)
                .await
                .map_err(ServiceError::from_db)?;
            }
        }
        summary.sub_crafts_upserted += 1;
    }

    if !plan.sub_craft_deletes.is_empty() {
        let res = sub_craft::Entity::delete_many()
            .filter(sub_craft::Column::SubCraftSlug.is_in(plan.sub_craft_deletes.clone()))
            .exec(db)
            .await
            .map_err(ServiceError::from_db)?;
        summary.sub_crafts_deleted = res.rows_affected as usize;
    }
    if !plan.craft_deletes.is_empty() {
        let res = craft::Entity::delete_many()
            .filter(craft::Column::CraftSlug.is_in(plan.craft_deletes.clone()))
            .exec(db)
            .await
            .map_err(ServiceError::from_db)?;
        summary.crafts_deleted = res.rows_affected as usize;
    }

    info!(
        crafts_upserted = summary.crafts_upserted,
        sub_crafts_upserted = summary.sub_crafts_upserted,
        sub_crafts_deleted = summary.sub_crafts_deleted,
        crafts_deleted = summary.crafts_deleted,
        "craft catalog synced"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(plan: &SyncPlan, crafts: &mut Vec<CraftRow>, subs: &mut Vec<SubCraftRow>) {
        for up in &plan.craft_upserts {
            match crafts.iter_mut().find(|c| c.slug == up.slug) {
                Some(c) => c.name = up.name.clone(),
                None => crafts.push(up.clone()),
            }
        }
        for up in &plan.sub_craft_upserts {
            match subs.iter_mut().find(|s| s.slug == up.slug) {
                Some(s) => {
                    s.name = up.name.clone();
                    s.craft_slug = up.craft_slug.clone();
                }
                None => subs.push(up.clone()),
            }
        }
        subs.retain(|s| !plan.sub_craft_deletes.contains(&s.slug));
        crafts.retain(|c| !plan.craft_deletes.contains(&c.slug));
    }

    #[test]
    fn slugify_is_deterministic_and_clean() {
        assert_eq!(slugify("Wood Carving"), "wood-carving");
        assert_eq!(slugify("  Papier   Mache "), "papier-mache");
        assert_eq!(slugify("Sozni Embroidery"), "sozni-embroidery");
        assert_eq!(slugify("Wood Carving"), slugify("Wood Carving"));
    }

    #[test]
    fn sub_craft_slugs_are_scoped_by_craft() {
        assert_eq!(sub_craft_slug("weaving", "Kani Weaving"), "weaving-kani-weaving");
    }

    #[test]
    fn empty_database_plans_full_catalog() {
        let plan = plan_sync(CRAFT_CATALOG, &[], &[]);
        assert_eq!(plan.craft_upserts.len(), CRAFT_CATALOG.len());
        let expected_subs: usize = CRAFT_CATALOG.iter().map(|c| c.sub_crafts.len()).sum();
        assert_eq!(plan.sub_craft_upserts.len(), expected_subs);
        assert!(plan.craft_deletes.is_empty());
        assert!(plan.sub_craft_deletes.is_empty());
    }

    #[test]
    fn second_run_is_a_no_op() {
        let mut crafts = Vec::new();
        let mut subs = Vec::new();
        let plan = plan_sync(CRAFT_CATALOG, &crafts, &subs);
        apply(&plan, &mut crafts, &mut subs);

        let second = plan_sync(CRAFT_CATALOG, &crafts, &subs);
        assert!(second.is_empty(), "{second:?}");
        assert_eq!(crafts.len(), CRAFT_CATALOG.len());
    }

    #[test]
    fn stale_rows_are_deleted() {
        let mut crafts = vec![CraftRow { slug: "basketry".into(), name: "Basketry".into() }];
        let mut subs = vec![SubCraftRow {
            slug: "basketry-willow".into(),
            name: "Willow".into(),
            craft_slug: "basketry".into(),
        }];
        let plan = plan_sync(CRAFT_CATALOG, &crafts, &subs);
        assert_eq!(plan.craft_deletes, vec!["basketry".to_string()]);
        assert_eq!(plan.sub_craft_deletes, vec!["basketry-willow".to_string()]);

        apply(&plan, &mut crafts, &mut subs);
        assert!(plan_sync(CRAFT_CATALOG, &crafts, &subs).is_empty());
    }

    #[test]
    fn renamed_craft_is_upserted_in_place() {
        let mut crafts = Vec::new();
        let mut subs = Vec::new();
        let plan = plan_sync(CRAFT_CATALOG, &crafts, &subs);
        apply(&plan, &mut crafts, &mut subs);

        crafts.iter_mut().find(|c| c.slug == "weaving").unwrap().name = "weaving (old)".into();
        let plan = plan_sync(CRAFT_CATALOG, &crafts, &subs);
        assert_eq!(plan.craft_upserts.len(), 1);
        assert_eq!(plan.craft_upserts[0].name, "Weaving");
        assert!(plan.craft_deletes.is_empty());
    }
}
