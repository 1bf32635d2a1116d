pub mod table;
pub mod errors;
pub mod dates;

pub use table::Table;
pub use errors::ForecastError;
