pub mod core;

pub use crate::core::catalog::{find_platform, find_platform_by_id, list_platforms};
pub use crate::core::cost::{compute_cost, estimate};
pub use crate::core::error::CalcError;
pub use crate::core::signal::SignalType;
pub use crate::core::volume::{compute_volume, SignalConfig};
