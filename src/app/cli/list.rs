//! List command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_list(root: &Path) -> Result<(), AppError> {
    let entries = crate::app::api::list(root)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
