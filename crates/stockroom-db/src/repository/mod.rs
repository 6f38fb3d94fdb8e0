//! # Repository Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  axum handler                                                           │
//! │       │  db.products().list_all()                                      │
//! │       ▼                                                                 │
//! │  ProductRepository              UserRepository                          │
//! │  ├── list_all()                 ├── find_by_email(email)                │
//! │  ├── get_by_id(id)              └── insert(name, email, hash)           │
//! │  ├── insert(product)                                                    │
//! │  ├── count()                                                            │
//! │  ├── categories() / add_category(name)                                  │
//! │  └── suppliers()  / add_supplier(name)                                  │
//! │       │                                                                 │
//! │       ▼  SQL                                                            │
//! │  SQLite                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`ProductRepository`](product::ProductRepository) - snapshot reads, inserts, facet lists
//! - [`UserRepository`](user::UserRepository) - account lookup for login

pub mod product;
pub mod user;
