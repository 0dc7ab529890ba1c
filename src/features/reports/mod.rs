//! Citizen reports: the persistent store, browse projections, detail, status
//! changes, sharing and export.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | Search and filter, newest first |
//! | POST | `/api/reports` | Submit a report |
//! | GET | `/api/reports/stats` | Counts per status |
//! | GET | `/api/reports/export` | JSON download of every report |
//! | GET | `/api/reports/{id}` | Detail with badge and timeline |
//! | PATCH | `/api/reports/{id}/status` | Change status |
//! | GET | `/api/reports/{id}/share` | Share payload |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ReportService, ReportStore};
