use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advertisement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub title: String,
    pub description: String,
    pub owner: String,

    /// Filled in by the database on insert, never taken from the client.
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub creation_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
