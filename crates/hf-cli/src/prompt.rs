use std::io::{BufRead, Write};

use hf_store::Confirmation;

use crate::ui;

/// Ask before a destructive action. `--yes` skips the question; without a
/// terminal to ask on, the action is refused.
pub fn confirm(question: &str, assume_yes: bool) -> anyhow::Result<Option<Confirmation>> {
    if assume_yes {
        return Ok(Some(Confirmation::confirmed()));
    }
    if !ui::prefs().interactive {
        anyhow::bail!("{question} requires confirmation; pass --yes to proceed");
    }

    eprint!("{question} [s/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer).then(Confirmation::confirmed))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn accepts_portuguese_and_english_yes() {
        for answer in ["s\n", "Sim", " y ", "YES"] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["", "n", "não", "talvez"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }
}
