mod conversions;

pub use conversions::InfraError;
