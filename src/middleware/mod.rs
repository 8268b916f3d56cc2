/*
 * Responsibility
 * - Public surface of the middleware layers
 * - auth::require(...) guards a route, the rest wrap the whole Router
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
