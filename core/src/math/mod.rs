pub mod units;

pub use units::UnitHelper;
