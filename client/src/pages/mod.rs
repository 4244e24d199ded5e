//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. This site has exactly one page, reachable at
//! `/` and `/home`.

pub mod home;
