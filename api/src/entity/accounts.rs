//! `tb_rekening` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_rekening")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "kode_rekening", unique)]
    pub code: String,
    #[sea_orm(column_name = "nama_rekening")]
    pub name: Option<String>,
    #[sea_orm(column_name = "tahun")]
    pub year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
