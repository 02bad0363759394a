use anyhow::Result;
use circular_buffer::CircularBuffer;

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes in input buffer

const ESC: u8 = 27;
const BRACKET: u8 = 91;
const ARROW_RIGHT: u8 = 67;
const ARROW_LEFT: u8 = 68;
const CTRL_C: u8 = 3;

/// What the player asked for during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub restart: bool,
    pub quit: bool,
}

impl Intents {
    pub fn is_empty(&self) -> bool {
        *self == Intents::default()
    }
}

/// Anything able to report the intents of the current tick
pub trait InputSource {
    fn sample(&mut self) -> Result<Intents>;
}

/// Turns raw terminal bytes into intents.
///
/// Bytes are buffered until the next tick. Arrow keys arrive as three byte
/// escape sequences (`ESC [ C` / `ESC [ D`) and may be split across ticks,
/// so an unfinished sequence is kept for the next sample. A lone `ESC` is a
/// quit only once it is still alone one tick later.
#[derive(Debug)]
pub struct KeyDecoder {
    buffer: InputBuffer,
    lone_escape: bool,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            buffer: InputBuffer::new(),
            lone_escape: false,
        }
    }

    pub fn push_byte(&mut self, key: u8) {
        if !Self::is_relevant(key) {
            return;
        }
        // if the buffer is full, ignore the input
        if self.buffer.is_full() {
            return;
        }
        self.buffer.push_back(key);
    }

    pub fn push_bytes(&mut self, keys: &[u8]) {
        for key in keys {
            self.push_byte(*key);
        }
    }

    fn is_relevant(key: u8) -> bool {
        matches!(
            key,
            ESC | BRACKET | 65..=68 | CTRL_C | b'a' | b'd' | b'r' | b'R' | b'q' | b'Q'
        )
    }

    /// Consume the buffered bytes and report the intents they carry
    pub fn decode(&mut self) -> Intents {
        let mut intents = Intents::default();
        while let Some(key) = self.buffer.pop_front() {
            match key {
                ESC => match self.buffer.front().copied() {
                    Some(BRACKET) => {
                        self.lone_escape = false;
                        match self.buffer.nth_front(1).copied() {
                            Some(ARROW_LEFT) => intents.turn_left = true,
                            Some(ARROW_RIGHT) => intents.turn_right = true,
                            // up/down arrows and anything else are ignored
                            Some(_) => {}
                            None => {
                                // the rest of the sequence has not arrived yet
                                self.buffer.push_front(ESC);
                                break;
                            }
                        }
                        self.buffer.pop_front();
                        self.buffer.pop_front();
                    }
                    Some(_) => {
                        self.lone_escape = false;
                        intents.quit = true;
                    }
                    None => {
                        if self.lone_escape {
                            self.lone_escape = false;
                            intents.quit = true;
                        } else {
                            self.lone_escape = true;
                            self.buffer.push_front(ESC);
                            break;
                        }
                    }
                },
                b'a' => intents.turn_left = true,
                b'd' => intents.turn_right = true,
                b'r' | b'R' => intents.restart = true,
                b'q' | b'Q' | CTRL_C => intents.quit = true,
                // stray bytes of a sequence
                _ => {}
            }
        }
        intents
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}
