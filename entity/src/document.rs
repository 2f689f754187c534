use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_id: i32,
    pub uploaded_by: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: String,
    pub status: String,
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::legal_case::Entity",
        from = "Column::CaseId",
        to = "super::legal_case::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LegalCase,
    #[sea_orm(
        belongs_to = "super::team_member::Entity",
        from = "Column::UploadedBy",
        to = "super::team_member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeamMember,
}

impl Related<super::legal_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegalCase.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
