pub const SUPPORT_PHONE: &str = "+01123456790";

#[cfg(debug_assertions)]
pub fn min_loading_time_ms() -> f64 {
    500.0 // Short floor when iterating locally
}

#[cfg(not(debug_assertions))]
pub fn min_loading_time_ms() -> f64 {
    3000.0 // Full splash in production
}
