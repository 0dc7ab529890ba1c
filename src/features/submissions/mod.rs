//! Report creation form: validation, location resolution and category
//! suggestions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/reports` | Submit a report (mounted by the reports feature) |
//! | GET | `/api/categories/suggestions` | Category auto-suggest by prefix |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
