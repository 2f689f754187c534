use crate::{
    model::enums::{DocumentCategory, DocumentStatus},
    server::{
        data::document::DocumentRepository,
        model::document::{CreateDocumentParams, DocumentFilter, UpdateDocumentParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
