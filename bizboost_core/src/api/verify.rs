/// Where verification links point. The token is the last path segment.
pub const PATH: &str = "/verify/:token";

/// Construct a verification path for a token.
pub fn path(token: &str) -> String {
    PATH.replace(":token", token)
}
