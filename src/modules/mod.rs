//! Feature modules. Each follows the same structure: `model.rs` for
//! entities and DTOs, `service.rs` for the business rules, `controller.rs`
//! for HTTP handlers and `router.rs` for route wiring.

pub mod accounts;
pub mod auth;
pub mod cohorts;
pub mod courses;
pub mod dashboard;
pub mod grades;
pub mod students;
pub mod subjects;
pub mod teachers;
