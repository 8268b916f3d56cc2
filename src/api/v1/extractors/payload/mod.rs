/*!
 * Request payload extractors
 *
 * Responsibility:
 * - Wrap axum's Json / Query / Path so rejections answer with the AppError body
 *   ({"error": {"code", "message"}}) instead of plain text
 *
 * Public API:
 * - ApiJson, ApiPath, ApiQuery
 */

mod core;

pub use core::{ApiJson, ApiPath, ApiQuery};
