//! Catalog repositories.
//!
//! One repository per entity kind. Associations are loaded in bulk through the join
//! tables: a single query per association for any number of owners, grouped by owner id.

pub mod character;
pub mod episode;
pub mod faction;
pub mod location;
pub mod lore;
pub mod ship;
pub mod tag;
pub mod technology;

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Related,
};

/// Load rows of `R` linked to each owner through the join table `J`.
///
/// # Arguments
/// - `owner_column` - Join table column holding the owner id
/// - `owner_ids` - Owners to load associations for
/// - `order_column` - Column of `R` the associations are sorted by (ascending)
/// - `owner_of` - Extracts the owner id from a join row
///
/// # Returns
/// - `Ok(HashMap)` - Sorted associations per owner id; owners without any are absent
/// - `Err(DbErr)` - Query failed
pub(crate) async fn load_related<C, J, R, F>(
    db: &C,
    owner_column: J::Column,
    owner_ids: &[i32],
    order_column: R::Column,
    owner_of: F,
) -> Result<HashMap<i32, Vec<R::Model>>, DbErr>
where
    C: ConnectionTrait,
    J: EntityTrait + Related<R>,
    R: EntityTrait,
    F: Fn(&J::Model) -> i32,
{
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = J::find()
        .filter(owner_column.is_in(owner_ids.iter().copied()))
        .find_also_related(R::default())
        .order_by_asc(order_column)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<R::Model>> = HashMap::new();
    for (link, related) in rows {
        if let Some(related) = related {
            grouped.entry(owner_of(&link)).or_default().push(related);
        }
    }

    Ok(grouped)
}

/// Replace every join row of one owner with `links`.
///
/// Not transactional; pass a transaction as the connection when atomicity matters.
pub(crate) async fn replace_links<C, J, A>(
    db: &C,
    owner_column: J::Column,
    owner_id: i32,
    links: Vec<A>,
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    J: EntityTrait,
    A: ActiveModelTrait<Entity = J> + Send,
{
    J::delete_many()
        .filter(owner_column.eq(owner_id))
        .exec(db)
        .await?;

    if !links.is_empty() {
        J::insert_many(links).exec_without_returning(db).await?;
    }

    Ok(())
}
