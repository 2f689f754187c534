mod auth;
mod invoice;
mod leave;
