//! Plain data: the [`Order`] record, its creation payload, the menu it is built
//! from, and the snapshots read back for display.

pub mod menu;
pub mod order;
pub mod snapshot;

pub use menu::*;
pub use order::*;
pub use snapshot::*;
