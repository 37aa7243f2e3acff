//! Shared endpoint constants and helpers used by client and server.

/// Port the quote service listens on by default.
pub const DEFAULT_PORT: u16 = 8000;
/// Base URL the client talks to unless told otherwise.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/ride/quote";
/// Path of the fleet registry endpoint.
pub const VEHICLES_UPDATE_PATH: &str = "/vehicles/update";

/// Join a base URL like `http://host:port/` with an absolute `path`.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim().trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000/", QUOTE_PATH),
            "http://127.0.0.1:8000/ride/quote"
        );
        assert_eq!(endpoint(DEFAULT_SERVER, QUOTE_PATH), "http://127.0.0.1:8000/ride/quote");
    }
}
