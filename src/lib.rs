//! Session-driven route gating for a multi-role web client.
//!
//! ARCHITECTURE
//! ============
//! The crate is the authorization/navigation policy core a rendering shell
//! links against. On every navigation the shell asks
//! [`routes::gate_for_path`] what to do with the current session snapshot
//! and obeys the answer exactly: render the route, show the loading
//! placeholder, or perform a replace-style redirect. All policy lives here
//! as pure functions over plain values, so nothing in this crate knows
//! which framework draws the screens or how the session is fetched.
//!
//! DESIGN
//! ======
//! The session source is an external collaborator reached through the
//! [`session::SessionSource`] seam: it owns asynchrony, retries, and
//! logout side effects, and hands this crate an immutable [`session::Session`]
//! snapshot per navigation. The gate itself never blocks, never panics,
//! and never mutates anything.

pub mod gate;
pub mod home;
pub mod routes;
pub mod session;

pub use gate::{GateResult, RouteRequirement, decide};
pub use home::home_path;
pub use routes::{gate_for_path, requirement_for};
pub use session::{AccountStatus, Role, Session, SessionSource, User};
