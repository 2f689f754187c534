use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub assigned_to: Option<i32>,
    pub created_by: i32,
    pub case_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_member::Entity",
        from = "Column::AssignedTo",
        to = "super::team_member::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::team_member::Entity",
        from = "Column::CreatedBy",
        to = "super::team_member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::legal_case::Entity",
        from = "Column::CaseId",
        to = "super::legal_case::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    LegalCase,
}

impl Related<super::legal_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegalCase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
