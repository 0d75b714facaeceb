//! Infrastructure layer - Storage, services and process-level concerns

pub mod logging;
pub mod password;
pub mod services;
pub mod storage;
