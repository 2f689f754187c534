mod document;
mod invoice;
mod leave_request;
mod legal_case;
mod task;
mod team_member;
