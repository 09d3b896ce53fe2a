//! Path helpers for the `/host` sandbox mount.

use std::path::PathBuf;

/// Directory holding the plugin's trace output.
///
/// Resolves to `/host/.local/share/zellij/jobdeck`, which is
/// `~/.local/share/zellij/jobdeck` when Zellij was started from the home
/// directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("jobdeck")
}

/// Maps a `~`-prefixed path onto the `/host` mount.
///
/// ```
/// use jobdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/jobs.json"), "/host/jobs.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/jobs.json"), "/etc/jobs.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Strips the `/host` mount prefix so logged paths read like host paths.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/jobdeck")
        );
    }

    #[test]
    fn tilde_round_trips_through_host_prefix() {
        let expanded = expand_tilde("~/catalogs/remote.json");
        assert_eq!(expanded, "/host/catalogs/remote.json");
        assert_eq!(strip_host_prefix(&expanded), "/catalogs/remote.json");
        assert_eq!(strip_host_prefix("/tmp/x"), "/tmp/x");
    }

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("./~/x"), "./~/x");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
