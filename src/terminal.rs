//! Terminal setup and teardown, and the byte-level terminal interface.

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::os::fd::AsFd;

/// How long a single read waits for input before reporting "no data yet".
const READ_TIMEOUT_MS: u16 = 100;

/// What the editor needs from a terminal.
pub trait Terminal {
    /// Read one byte, waiting at most a short timeout. `Ok(None)` means nothing arrived.
    /// A closed input is an error.
    fn read_byte(&mut self) -> Result<Option<u8>>;
    /// Write `bytes` and flush them.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
    /// Window size as `(rows, cols)`.
    fn size(&self) -> Result<(usize, usize)>;
}

/// The controlling terminal: reads raw bytes from the tty, writes to stdout.
pub struct Tty {
    input: File,
}

impl Tty {
    pub fn open() -> Result<Self> {
        let input = File::open("/dev/tty").context("Failed to open /dev/tty")?;
        Ok(Self { input })
    }
}

impl Terminal for Tty {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut fds = [PollFd::new(self.input.as_fd(), PollFlags::POLLIN)];
        match poll(&mut fds, PollTimeout::from(READ_TIMEOUT_MS)) {
            Ok(0) | Err(Errno::EINTR) => return Ok(None),
            Ok(_) => {}
            Err(e) => return Err(e).context("poll on tty failed"),
        }
        let mut byte = [0u8; 1];
        match (&self.input).read(&mut byte) {
            Ok(0) => bail!("tty closed"),
            Ok(_) => Ok(Some(byte[0])),
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(e).context("read from tty failed"),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes).context("write to terminal failed")?;
        stdout.flush().context("flush to terminal failed")?;
        Ok(())
    }

    fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = terminal::size().context("Failed to query window size")?;
        Ok((rows as usize, cols as usize))
    }
}

/// RAII guard for terminal state.
///
/// Raw mode and the alternate screen are entered in `new()` and always restored in
/// `Drop`, including when `run()` bails out with an error.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("enable_raw_mode failed")?;
        let mut stdout = io::stdout();
        stdout.execute(terminal::EnterAlternateScreen)?;
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(terminal::Clear(ClearType::All));
        let _ = stdout.execute(cursor::MoveTo(0, 0));
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
