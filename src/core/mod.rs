//! Core conversion logic, independent of the terminal front end

pub mod config;
pub mod connectivity;
pub mod conversion;
pub mod country;
pub mod currency;
pub mod log;
pub mod orchestrator;
pub mod regions;

// Re-export main types for cleaner imports
pub use connectivity::Connectivity;
pub use conversion::{
    ApiKey, ConversionClient, ConversionError, ConversionRequest, ConversionResult, RateEntry,
    ValidationError,
};
pub use country::CountryCurrencyResolver;
pub use currency::CurrencyCode;
pub use orchestrator::{ConversionOrchestrator, ConversionState, PendingConversion};
