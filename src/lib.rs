//! # Lectio
//!
//! A role-gated academic records REST API built with Rust, Axum and
//! PostgreSQL. It manages accounts, courses, subjects, cohorts, students,
//! teachers and grades behind JWT authentication, with per-operation
//! role-based authorization.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Environment-driven configuration (JWT, CORS, database)
//! ├── middleware/       # Bearer-token extraction
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and token issuance
//! │   ├── accounts/    # Login accounts and roles
//! │   ├── courses/     # Course catalog
//! │   ├── subjects/    # Subject catalog
//! │   ├── cohorts/     # Class cohorts
//! │   ├── students/    # Students (1:1 with an account)
//! │   ├── teachers/    # Teachers (1:1 with an account)
//! │   ├── grades/      # Grades and aggregate scores
//! │   └── dashboard/   # Admin counts
//! ├── store/            # Repository traits, PostgreSQL and in-memory stores
//! └── utils/            # Errors, JWT, password hashing, access control
//! ```
//!
//! Each feature module keeps the same internal structure: `model.rs`,
//! `service.rs`, `controller.rs`, `router.rs`. All decision logic lives in
//! the services; controllers only parse, delegate and map errors.
//!
//! ## Authorization model
//!
//! Every service operation re-derives the caller's role from the bearer
//! token's `scope` claim and checks it against the operation's allow-list
//! before any repository access. The recognized roles are `admin`,
//! `pedagogico`, `recruiter`, `professor` and `aluno`. Failed role checks
//! and broken tokens both surface as 401; missing entities and empty
//! listings are 404 (empty listings are deliberately an error in this API);
//! validation failures are 400.
//!
//! ## Account coupling
//!
//! Students and teachers own exactly one login account each. Creating one
//! creates its account, updating one rewrites the account's login and
//! secret in lockstep, and deleting one deletes the account as well.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
