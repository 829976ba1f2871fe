pub mod ram;
pub mod timer;

pub use ram::Ls8Ram;
pub use timer::{Ls8Clock, Ls8Timers, ManualClock, WallClock};
