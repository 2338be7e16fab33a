//! HTTP Board API for ProjectBoard
//!
//! Exposes the board commands from `projectboard-kanban` over JSON:
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/api/columns` | all columns, seeding defaults on an empty board |
//! | GET | `/api/columns/:id` | one column, or 404 |
//! | POST | `/api/columns` | 201 with the saved column |
//! | DELETE | `/api/columns/:id` | removes a non-default column and its tasks |
//! | GET | `/api/tasks` | all tasks |
//! | GET | `/api/tasks/:id` | one task, or 404 |
//! | POST | `/api/tasks` | 201 with the saved task |
//! | DELETE | `/api/tasks/:id` | removes one task |
//! | DELETE | `/api/tasks/column/:column_id` | removes every task in a column |
//! | GET | `/health` | `{"status":"ok"}` |

pub mod cli;
pub mod error;
pub mod logging;
mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use server::{build_state, serve, shutdown_signal};
pub use state::AppState;
