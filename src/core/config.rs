use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        println!("{}", content);
        Ok(())
    }

    /// Open `path` in `editor`, falling back to $EDITOR/$VISUAL and then
    /// the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let mut candidates = Vec::new();
        if let Some(e) = editor {
            candidates.push(e.clone());
        }
        candidates.push(default_editor);

        for ed in &candidates {
            if let Ok(status) = Command::new(ed).arg(path).status()
                && status.success()
            {
                return Ok(ed.clone());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit configuration file with {}",
            candidates.join(" or ")
        )))
    }
}
