//! udev rule granting a user access to Litra Beam hidraw nodes.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Location of the installed rule.
pub const RULES_PATH: &str = "/etc/udev/rules.d/99-litra.rules";

/// Render the rule for an executable and user.
///
/// The rule runs the executable with `--paths-only` whenever a hidraw device
/// is added and grants the user read/write access to every reported path.
pub fn render_rule(executable: &Path, user: &str) -> String {
    format!(
        "ACTION==\"add\", SUBSYSTEMS==\"hidraw\", RUN+=\"/bin/sh -c 'for i in $({} \
         --paths-only); do setfacl -m u:{}:rw $i; done'\", MODE=\"0660\"\n",
        executable.display(),
        user,
    )
}

/// Install the rule for the current executable.
pub fn install(user: Option<&str>) -> Result<String> {
    if !cfg!(target_os = "linux") {
        bail!("udev rule creation is only for Linux");
    }

    let user = match user {
        Some(user) if !user.is_empty() => user,
        _ => bail!("cannot detect who to install rules for, --user is required"),
    };

    let executable = std::env::current_exe().context("unable to find executable path")?;
    let rule = render_rule(&executable, user);

    fs::write(RULES_PATH, &rule)
        .with_context(|| format!("unable to write udev rules to {RULES_PATH}"))?;

    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_text() {
        let rule = render_rule(Path::new("/usr/bin/litra-ctl"), "jane");
        assert_eq!(
            rule,
            "ACTION==\"add\", SUBSYSTEMS==\"hidraw\", RUN+=\"/bin/sh -c 'for i in \
             $(/usr/bin/litra-ctl --paths-only); do setfacl -m u:jane:rw $i; done'\", \
             MODE=\"0660\"\n"
        );
    }

    #[test]
    fn user_is_required() {
        assert!(install(None).is_err());
        assert!(install(Some("")).is_err());
    }
}
