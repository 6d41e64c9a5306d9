//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own screen-level orchestration and delegate rendering details
//! to `components`.

pub mod home;
