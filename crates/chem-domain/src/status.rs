//! Tabla de códigos HTTP de PUG REST.
//!
//! Cada estado se traduce a un par (símbolo de fallo, descripción) que se
//! usa tal cual en los mensajes visibles para el usuario. Los estados 200 y
//! 202 no tienen símbolo.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub code: u16,
    pub symbol: Option<&'static str>,
    pub description: &'static str,
}

const SERVER_ERROR: (&str, &str) = ("PUGREST.ServerError/Unknown", "Server-side or unknown error");

/// Devuelve la fila de la tabla para `code`. Estados desconocidos se
/// agrupan con el 500.
pub fn describe_status(code: u16) -> StatusInfo {
    let (symbol, description) = match code {
        200 => (None, "Success"),
        202 => (None, "Accepted, asynchronous operation pending"),
        400 => (Some("PUGREST.BadRequest"), "Malformed request"),
        404 => (Some("PUGREST.NotFound"), "Input record not found"),
        405 => (Some("PUGREST.NotAllowed"), "Disallowed request"),
        501 => (Some("PUGREST.Unimplemented"), "Operation not implemented"),
        503 => (Some("PUGREST.ServerBusy"), "Overloaded, retry later"),
        504 => (Some("PUGREST.Timeout"), "Request timed out"),
        _ => (Some(SERVER_ERROR.0), SERVER_ERROR.1),
    };
    StatusInfo { code, symbol, description }
}

/// Estados que el servicio considera exitosos (200 y 202).
pub fn is_success_status(code: u16) -> bool { matches!(code, 200 | 202) }

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "HTTP {} {}: {}", self.code, symbol, self.description),
            None => write!(f, "HTTP {}: {}", self.code, self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let rows = [(400, "PUGREST.BadRequest", "Malformed request"),
                    (404, "PUGREST.NotFound", "Input record not found"),
                    (405, "PUGREST.NotAllowed", "Disallowed request"),
                    (500, "PUGREST.ServerError/Unknown", "Server-side or unknown error"),
                    (501, "PUGREST.Unimplemented", "Operation not implemented"),
                    (503, "PUGREST.ServerBusy", "Overloaded, retry later"),
                    (504, "PUGREST.Timeout", "Request timed out")];
        for (code, symbol, description) in rows {
            let info = describe_status(code);
            assert_eq!(info.symbol, Some(symbol), "symbol for {code}");
            assert_eq!(info.description, description, "description for {code}");
        }
    }

    #[test]
    fn test_success_codes_have_no_symbol() {
        assert_eq!(describe_status(200).symbol, None);
        assert_eq!(describe_status(202).description, "Accepted, asynchronous operation pending");
        assert!(is_success_status(200));
        assert!(is_success_status(202));
        assert!(!is_success_status(204));
        assert!(!is_success_status(503));
    }

    #[test]
    fn test_unknown_code_falls_back_to_server_error() {
        let info = describe_status(418);
        assert_eq!(info.code, 418);
        assert_eq!(info.symbol, Some("PUGREST.ServerError/Unknown"));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(describe_status(503).to_string(), "HTTP 503 PUGREST.ServerBusy: Overloaded, retry later");
        assert_eq!(describe_status(200).to_string(), "HTTP 200: Success");
    }
}
