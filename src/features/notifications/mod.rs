//! Report lifecycle notifications.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/notifications` | All notifications with the unread count |
//! | GET | `/api/notifications/unread-count` | Unread count only |
//! | PATCH | `/api/notifications/{id}/read` | Mark one as read |
//! | POST | `/api/notifications/read-all` | Mark every notification as read |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
