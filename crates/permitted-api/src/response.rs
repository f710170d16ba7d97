//! The success half of the public response envelope.

use serde::Serialize;

/// Wraps every successful payload as `{"success": true, "data": …}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
  pub success: bool,
  pub data:    T,
}

impl<T> ApiSuccess<T> {
  pub fn new(data: T) -> Self { Self { success: true, data } }
}
