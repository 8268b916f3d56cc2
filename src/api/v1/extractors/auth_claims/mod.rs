/*!
 * Authenticated claims extractor
 *
 * Responsibility:
 * - Hand the verified token claims (Claims) to handlers
 * - The permission middleware verifies and inserts them; handlers only read
 *
 * Public API:
 * - AuthClaims
 */

mod core;

pub use core::AuthClaims;
