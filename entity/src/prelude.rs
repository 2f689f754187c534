pub use super::client::Entity as Client;
pub use super::document::Entity as Document;
pub use super::invoice::Entity as Invoice;
pub use super::invoice_item::Entity as InvoiceItem;
pub use super::leave_request::Entity as LeaveRequest;
pub use super::legal_case::Entity as LegalCase;
pub use super::task::Entity as Task;
pub use super::team_member::Entity as TeamMember;
