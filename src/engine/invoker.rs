use super::{EngineCommand, EngineError};
use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Run one engine invocation: feed `text` on stdin, collect stdout lines as
/// unknown words. Any stderr content fails the call and its stdout is
/// discarded; past `timeout` the child is killed and the call fails.
pub fn run(
    command: &EngineCommand,
    text: &str,
    timeout: Duration,
) -> Result<Vec<String>, EngineError> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| EngineError::Spawn {
            program: command.program.clone(),
            source,
        })?;

    // Readers first, so an engine that talks while we are still feeding it
    // cannot fill a pipe and stall everyone.
    let stdout = reader_thread(child.stdout.take());
    let stderr = reader_thread(child.stderr.take());

    // Feed the text and close stdin so the engine sees EOF. A child that
    // exits early closes its end first; the broken pipe is not the failure
    // we want to report, its stderr is.
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(source) = stdin.write_all(text.as_bytes()) {
            if source.kind() != io::ErrorKind::BrokenPipe {
                reap(&mut child);
                return Err(EngineError::Io {
                    program: command.program.clone(),
                    source,
                });
            }
        }
    }

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    reap(&mut child);
                    return Err(EngineError::Timeout {
                        program: command.program.clone(),
                        timeout,
                    });
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(source) => {
                reap(&mut child);
                return Err(EngineError::Io {
                    program: command.program.clone(),
                    source,
                });
            }
        }
    }

    let diagnostics = stderr.join().unwrap_or_default();
    let output = stdout.join().unwrap_or_default();

    let message = diagnostics.trim();
    if !message.is_empty() {
        return Err(EngineError::Diagnostics {
            program: command.program.clone(),
            message: message.to_string(),
        });
    }

    Ok(output
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn reader_thread<R: Read + Send + 'static>(stream: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_string(&mut buf);
        }
        buf
    })
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> EngineCommand {
        EngineCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[test]
    fn test_stdout_lines_become_words_in_order() {
        let words = run(&shell("cat"), "zweite\nerste\n", Duration::from_secs(5)).unwrap();
        assert_eq!(words, vec!["zweite", "erste"]);
    }

    #[test]
    fn test_blank_lines_and_trailing_whitespace_are_dropped() {
        let words = run(
            &shell("printf 'one  \\n\\n\\ntwo\\n'"),
            "",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_stderr_fails_the_call_and_discards_stdout() {
        let err = run(
            &shell("echo salvage; echo broken dictionary >&2"),
            "",
            Duration::from_secs(5),
        )
        .unwrap_err();
        match err {
            EngineError::Diagnostics { message, .. } => {
                assert!(message.contains("broken dictionary"));
            }
            other => panic!("expected Diagnostics, got {:?}", other),
        }
    }

    #[test]
    fn test_nonzero_exit_with_quiet_stderr_is_success() {
        // spell front-ends use the exit code to mean "misspellings found"
        let words = run(&shell("echo wrod; exit 1"), "", Duration::from_secs(5)).unwrap();
        assert_eq!(words, vec!["wrod"]);
    }

    #[test]
    fn test_slow_engine_is_killed() {
        let start = Instant::now();
        let err = run(&shell("sleep 30"), "", Duration::from_millis(200)).unwrap_err();
        assert!(matches!(err, EngineError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let command = EngineCommand {
            program: "no-such-binary-really".to_string(),
            args: Vec::new(),
        };
        let err = run(&command, "", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
        assert!(!err.is_fatal());
    }
}
