use super::EngineError;
use std::path::Path;

/// Candidate engines, tried in order. The generic `spell` front-end comes
/// first; the concrete checkers follow.
pub const CANDIDATES: [&str; 4] = ["spell", "aspell", "hunspell", "ispell"];

/// Pick the engine executable: an explicit override must exist on PATH,
/// otherwise the first available candidate wins.
pub fn resolve_program(program_override: Option<&str>) -> Result<String, EngineError> {
    if let Some(program) = program_override {
        return if which::which(program).is_ok() {
            Ok(program.to_string())
        } else {
            Err(EngineError::NoEngine {
                tried: program.to_string(),
            })
        };
    }

    for candidate in CANDIDATES {
        if which::which(candidate).is_ok() {
            return Ok(candidate.to_string());
        }
    }

    Err(EngineError::NoEngine {
        tried: CANDIDATES.join(", "),
    })
}

/// Default flags per engine: list unknown words, fix the dictionary, and
/// point the personal wordlist at the null device so a user's private
/// dictionary cannot change scan results. Unknown engines get no defaults.
pub fn base_args(program: &str) -> Vec<String> {
    let name = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(program);

    let args: &[&str] = match name {
        "spell" => &[],
        "aspell" => &["list", "--lang=en_US", "--personal=/dev/null"],
        "hunspell" => &["-l", "-d", "en_US", "-p", "/dev/null"],
        "ispell" => &["-l", "-d", "american", "-p", "/dev/null"],
        _ => &[],
    };

    args.iter().map(|s| s.to_string()).collect()
}
