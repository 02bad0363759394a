// terminal plumbing: raw stdin so single key presses reach the game without enter,
// and a reader thread feeding those bytes to the simulation thread
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{bail, Context, Result};
use termios::{tcsetattr, Termios, ECHO, ICANON, ISIG, TCSANOW};
use tracing::{debug, warn};

use crate::input::{InputSource, Intents, KeyDecoder};

const STDIN_FD: i32 = 0; // 0 is file descriptor for stdin

/// Keeps stdin in raw mode and the cursor hidden until dropped
pub struct RawModeGuard {
    old_termios: Termios,
}

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        let old_termios =
            Termios::from_fd(STDIN_FD).context("stdin is not a terminal, cannot read key presses")?;
        let mut new_termios = old_termios; // copy the termios struct
        // no echo, no line buffering, and ctrl-c arrives as a byte so the terminal is restored on quit
        new_termios.c_lflag &= !(ICANON | ECHO | ISIG);
        tcsetattr(STDIN_FD, TCSANOW, &new_termios).context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        write!(stdout, "\x1b[?25l").context("Failed to hide cursor")?;
        stdout.flush().context("Failed to hide cursor")?;
        debug!("terminal switched to raw mode");
        Ok(Self { old_termios })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // reset stdin to default
        if let Err(err) = tcsetattr(STDIN_FD, TCSANOW, &self.old_termios) {
            warn!(%err, "failed to restore terminal mode");
        }
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\x1b[?25h");
        let _ = stdout.flush();
    }
}

/// Key presses read from stdin by a background thread
pub struct TerminalInput {
    receiver: Receiver<u8>,
    decoder: KeyDecoder,
}

impl TerminalInput {
    pub fn spawn() -> Self {
        Self {
            receiver: spawn_stdin_channel(),
            decoder: KeyDecoder::new(),
        }
    }
}

fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut reader = io::stdin();
        let mut buffer: [u8; 1] = [0; 1];
        // read one u8 at a time, stop once stdin closes or the game is gone
        while reader.read_exact(&mut buffer).is_ok() {
            if tx.send(buffer[0]).is_err() {
                break;
            }
        }
    });
    rx
}

impl InputSource for TerminalInput {
    fn sample(&mut self) -> Result<Intents> {
        loop {
            match self.receiver.try_recv() {
                Ok(key) => self.decoder.push_byte(key),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => bail!("stdin closed, no more input"),
            }
        }
        Ok(self.decoder.decode())
    }
}
