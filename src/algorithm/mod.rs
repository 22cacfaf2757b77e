/// Chaos game point sampling (continuous mode)
pub mod chaos;
/// Engine configuration and mode dispatch
pub mod engine;
/// Recursive polygon subdivision (discrete mode)
pub mod subdivision;
/// Parameter and weight validation
pub mod validation;
