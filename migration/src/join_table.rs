//! Shared builder for many-to-many join tables.
//!
//! Every join table in the schema has the same shape: two integer columns forming a
//! composite primary key, each referencing the `id` of its parent table and cascading on
//! delete so that removing either side removes the membership.

use sea_orm_migration::{prelude::*, schema::*};

/// One side of a join table: the join column and the table it references.
pub struct JoinSide {
    pub column: &'static str,
    pub references: &'static str,
}

pub fn create_join_table(
    table: &'static str,
    left: JoinSide,
    right: JoinSide,
) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(integer(Alias::new(left.column)))
        .col(integer(Alias::new(right.column)))
        .primary_key(
            Index::create()
                .col(Alias::new(left.column))
                .col(Alias::new(right.column)),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-{}", table, left.column))
                .from(Alias::new(table), Alias::new(left.column))
                .to(Alias::new(left.references), Alias::new("id"))
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-{}", table, right.column))
                .from(Alias::new(table), Alias::new(right.column))
                .to(Alias::new(right.references), Alias::new("id"))
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

pub fn drop_join_table(table: &'static str) -> TableDropStatement {
    Table::drop().table(Alias::new(table)).if_exists().to_owned()
}

/// Join side referencing the `tag` table, shared by every `*_tag` table.
pub fn tag_side() -> JoinSide {
    JoinSide {
        column: "tag_id",
        references: "tag",
    }
}
