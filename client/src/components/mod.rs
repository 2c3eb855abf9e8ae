//! UI components shared across pages.
//!
//! DESIGN
//! ======
//! Components read the [`ApiClient`](crate::net::client::ApiClient) and
//! [`Session`](crate::state::credential::Session) from context and keep their
//! own signals. Anything that fetches owns an
//! [`ActiveFlag`](crate::util::active::ActiveFlag) cleared on cleanup.

pub mod add_employee_dialog;
pub mod attendance_history;
pub mod attendance_widget;
pub mod authenticated_avatar;
pub mod header;
pub mod layout;
pub mod leave_request_form;
pub mod protected_route;
pub mod sidebar;
