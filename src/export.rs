use crate::color::Hex;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// One `"<name>: <#HEX>"` line per color. Unnamed colors use the hex itself.
pub fn render_text(colors: &[Hex]) -> String {
    colors
        .iter()
        .map(|hex| match hex.name() {
            Some(name) => format!("{name}: {hex}"),
            None => format!("{hex}: {hex}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn file_name(unix_millis: i64) -> String {
    format!("spectrum-palette-{unix_millis}.txt")
}

/// Write the export file into `dir`, returning its path.
pub fn write_export(dir: &Path, colors: &[Hex]) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let millis = (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
    let path = dir.join(file_name(millis));
    std::fs::write(&path, render_text(colors))
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), colors = colors.len(), "exported palette");
    Ok(path)
}

/// Put the canonical `#RRGGBB` form on the system clipboard.
pub fn copy_to_clipboard(hex: Hex) -> anyhow::Result<String> {
    let text = hex.to_string();
    cli_clipboard::set_contents(text.clone())
        .map_err(|e| anyhow::anyhow!("clipboard unavailable: {e}"))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_names_when_known() {
        let text = render_text(&[Hex::new(255, 0, 0), Hex::new(0x12, 0xab, 0x9f)]);
        assert_eq!(text, "red: #FF0000\n#12AB9F: #12AB9F");
    }

    #[test]
    fn file_name_is_timestamped() {
        assert_eq!(
            file_name(1700000000000),
            "spectrum-palette-1700000000000.txt"
        );
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let path = write_export(&out, &[Hex::new(0, 0, 0), Hex::new(255, 255, 255)]).unwrap();
        assert!(path.starts_with(&out));
        let body = std::fs::read_to_string(path).unwrap();
        assert_eq!(body, "black: #000000\nwhite: #FFFFFF");
    }
}
