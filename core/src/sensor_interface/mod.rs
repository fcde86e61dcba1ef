pub mod info;
pub mod package;

pub use info::InfoMessage;
pub use package::SensorPackage;
