// Feature layout, household ratios and request/response types
pub mod ml;

// Domain-specific error types
pub mod errors;
