//! Child process execution with fully captured output.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: Option<ExitStatus>,
    /// The child was killed after exceeding the timeout.
    pub timed_out: bool,
}

impl CapturedOutput {
    /// Any stderr output counts as failure, whatever the exit status says.
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.stderr.is_empty()
    }
}

fn drain<R: Read + Send + 'static>(source: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut source) = source {
            // A read error just truncates what we report.
            let _ = source.read_to_end(&mut buf);
        }
        buf
    })
}

fn spawn(program: &Path, args: &[String]) -> io::Result<Child> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    // Compiler drivers fork cc1plus, as and ld, which inherit our pipes.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    command.spawn()
}

/// Kill the child and everything it started.
fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        // SAFETY: killpg only sends a signal. The child leads its own group and
        // has not been reaped yet, so the group id cannot have been reused.
        let group = child.id() as libc::pid_t;
        if unsafe { libc::killpg(group, libc::SIGKILL) } == 0 {
            return;
        }
    }
    // The child may exit between try_wait and kill.
    let _ = child.kill();
}

/// Run `program` with `args`, wait for it to exit and return everything it
/// printed. A child still running after `timeout` is killed and whatever it
/// wrote up to that point is returned with `timed_out` set.
pub fn run_captured(
    program: &Path,
    args: &[String],
    timeout: Duration,
) -> io::Result<CapturedOutput> {
    let mut child = spawn(program, args)?;

    // Both pipes are drained concurrently so a chatty child cannot block on a full pipe.
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let start = Instant::now();
    let mut timed_out = false;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if start.elapsed() >= timeout {
            tracing::warn!("{} exceeded {:?}, killing it", program.display(), timeout);
            kill_tree(&mut child);
            timed_out = true;
            break child.wait()?;
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout.join().unwrap_or_default();
    let stderr = stderr.join().unwrap_or_default();
    tracing::debug!(
        "{} exited with {} after {:.2?}",
        program.display(),
        status,
        start.elapsed()
    );

    Ok(CapturedOutput {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        status: Some(status),
        timed_out,
    })
}
