use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use log::{debug, trace, warn};

use crate::ChannelError;

/// A running subject calculator, spoken to one line at a time
///
/// The subject's stdout is drained by a dedicated thread, so a subject that stops answering is
/// reported as a timeout instead of blocking the caller. Dropping the subject closes its stdin,
/// then kills and reaps the process.
pub struct Subject {
    program: PathBuf,
    child: Child,
    stdin: Option<ChildStdin>,
    lines: Receiver<io::Result<String>>,
    timeout: Duration,
}
impl Subject {
    pub fn spawn<S: AsRef<OsStr>>(
        program: &Path,
        args: &[S],
        timeout: Duration,
    ) -> Result<Self, ChannelError> {
        let program = resolve_program(program)?;
        debug!(
            "spawning subject {} with {} argument(s)",
            program.display(),
            args.len()
        );

        let mut child = Command::new(&program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ChannelError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        let (tx, rx) = channel::unbounded();
        let reader = match child.stdout.take() {
            Some(stdout) => thread::Builder::new()
                .name("subject-stdout".to_string())
                .spawn(move || forward_lines(stdout, tx)),
            None => Err(io::Error::new(
                io::ErrorKind::Other,
                "subject stdout is not captured",
            )),
        };
        if let Err(source) = reader {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ChannelError::Spawn {
                program: program.display().to_string(),
                source,
            });
        }

        let stdin = child.stdin.take();
        Ok(Self {
            program,
            child,
            stdin,
            lines: rx,
            timeout,
        })
    }

    #[inline]
    pub fn program(&self) -> &Path {
        self.program.as_path()
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `line` to the subject and waits for exactly one line in response
    ///
    /// The returned line has its terminator removed but is otherwise exactly as written.
    pub fn request(&mut self, line: &str) -> Result<String, ChannelError> {
        trace!("> {}", line);
        let stdin = match self.stdin.as_mut() {
            Some(stdin) => stdin,
            None => return Err(self.closed()),
        };
        if let Err(err) = writeln!(stdin, "{}", line).and_then(|_| stdin.flush()) {
            return Err(match err.kind() {
                io::ErrorKind::BrokenPipe => self.closed(),
                _ => ChannelError::Write(err),
            });
        }

        match self.lines.recv_timeout(self.timeout) {
            Ok(Ok(mut response)) => {
                let len = response.trim_end_matches(&['\r', '\n'][..]).len();
                response.truncate(len);
                trace!("< {}", response);
                Ok(response)
            }
            Ok(Err(err)) => Err(ChannelError::Read(err)),
            Err(RecvTimeoutError::Timeout) => Err(ChannelError::Timeout {
                after: self.timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(self.closed()),
        }
    }

    fn closed(&mut self) -> ChannelError {
        self.stdin = None;
        let status = self.child.try_wait().ok().flatten();
        warn!(
            "subject {} closed the channel ({})",
            self.program.display(),
            status.map_or_else(|| "still running".to_string(), |s| s.to_string())
        );
        ChannelError::Closed { status }
    }
}

impl Drop for Subject {
    fn drop(&mut self) {
        drop(self.stdin.take());
        match self.child.try_wait() {
            Ok(Some(status)) if !status.success() => {
                warn!("subject {} exited with {}", self.program.display(), status)
            }
            Ok(Some(_)) => (),
            Ok(None) | Err(_) => {
                let _ = self.child.kill();
            }
        }
        if let Err(err) = self.child.wait() {
            warn!(
                "unable to reap subject {}: {}",
                self.program.display(),
                err
            );
        }
    }
}

/// Resolves a bare program name on `PATH`; anything containing a path separator is used as given
pub fn resolve_program(program: &Path) -> Result<PathBuf, ChannelError> {
    if program.components().count() > 1 {
        return Ok(program.to_path_buf());
    }
    which::which(program).map_err(|source| ChannelError::Resolve {
        program: program.display().to_string(),
        source,
    })
}

fn forward_lines(stdout: ChildStdout, tx: Sender<io::Result<String>>) {
    let mut reader = BufReader::new(stdout);
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(Ok(line)).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = tx.send(Err(err));
                break;
            }
        }
    }
}
