//! HTTP handlers, one module per resource.

pub mod health_handler;
pub mod product_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use product_handler::product_routes;
pub use user_handler::user_routes;

use common::AppError;

/// Query strings arrive untyped; unparsable numbers fall back to the
/// store's defaults instead of failing the request.
pub(crate) fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Empty query values count as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn require_id(id: &str, message: &str) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_is_lenient() {
        assert_eq!(parse_number::<i32>(Some("3")), Some(3));
        assert_eq!(parse_number::<i32>(Some("abc")), None);
        assert_eq!(parse_number::<f64>(Some(" 12.5 ")), Some(12.5));
        assert_eq!(parse_number::<i32>(None), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }
}
