pub mod admin;
pub mod aggregate;
pub mod backup;
pub mod calculator;
pub mod clock;
pub mod employees;
pub mod locks;
pub mod log;
pub mod policy;

pub use clock::TimeClock;
pub use policy::{ClockPolicy, SessionPolicy, SkewPolicy};
