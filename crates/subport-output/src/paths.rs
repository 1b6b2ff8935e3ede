use std::path::{Path, PathBuf};

/// Appended to the input file stem when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_convertkit_ready";

/// `<dir>/<stem>_convertkit_ready.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "subscribers".to_string());
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.csv");
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("exports/members.csv")),
            PathBuf::from("exports/members_convertkit_ready.csv")
        );
        assert_eq!(
            default_output_path(Path::new("members.csv")),
            PathBuf::from("members_convertkit_ready.csv")
        );
    }

    #[test]
    fn stem_without_extension_is_kept() {
        assert_eq!(
            default_output_path(Path::new("/tmp/audience")),
            PathBuf::from("/tmp/audience_convertkit_ready.csv")
        );
    }
}
