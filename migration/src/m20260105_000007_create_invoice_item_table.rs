use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000006_create_invoice_table::Invoice;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceItem::Id))
                    .col(integer(InvoiceItem::InvoiceId))
                    .col(text(InvoiceItem::Description))
                    .col(integer(InvoiceItem::Quantity).default(1))
                    .col(big_integer(InvoiceItem::UnitPriceCents))
                    .col(big_integer(InvoiceItem::AmountCents))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_item_invoice_id")
                            .from(InvoiceItem::Table, InvoiceItem::InvoiceId)
                            .to(Invoice::Table, Invoice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InvoiceItem {
    Table,
    Id,
    InvoiceId,
    Description,
    Quantity,
    UnitPriceCents,
    AmountCents,
}
