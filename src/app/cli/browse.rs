//! Interactive browse-and-query session.

use crate::app::config::SessionOptions;
use crate::domain::AppError;

pub fn run_browse(options: &SessionOptions) -> Result<(), AppError> {
    crate::app::api::browse(options)
}
