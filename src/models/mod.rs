pub mod accessory;
pub mod inventory;
pub mod source;

pub use accessory::*;
pub use inventory::*;
pub use source::*;
