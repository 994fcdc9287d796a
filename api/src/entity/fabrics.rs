use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fabrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique business key; "ref" is a keyword in Rust, hence the field name
    #[sea_orm(column_name = "ref", unique)]
    pub ref_code: String,
    pub fabric_group: String,
    pub fabrication: String,
    pub gsm: i32,
    pub width: String,
    pub composition: String,
    pub status: String,
    pub manufacturer_id: i32,
    pub meta_data: Json,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ManufacturerId",
        to = "super::users::Column::Id"
    )]
    Manufacturer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
