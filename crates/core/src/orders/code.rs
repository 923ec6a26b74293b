//! Order codes
//!
//! Codes look like `YORI-MH2K9ZQ4X7`: a prefix, a base-36 millisecond tick and
//! a two character random suffix.
//!
//! The tick never repeats inside one generator, even when the clock stalls or
//! goes backwards, so codes from one process are always unique. The suffix
//! makes collisions between processes unlikely, and storage rejects the rest.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU8,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{Rng, seq::SliceRandom, thread_rng};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "YORI";

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const SUFFIX_LEN: usize = 2;

/// Human readable order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderCode(String);

impl OrderCode {
    /// Wrap a code read back from storage or supplied by an operator.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the code text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for OrderCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Generates order codes with a strictly increasing tick.
#[derive(Debug)]
pub struct OrderCodeGenerator {
    prefix: String,
    last_tick: AtomicU64,
}

impl OrderCodeGenerator {
    /// Create a generator for `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last_tick: AtomicU64::new(0),
        }
    }

    /// Configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a code from the system clock.
    pub fn generate(&self) -> OrderCode {
        self.generate_at(now_millis(), &mut thread_rng())
    }

    /// Generate a code as if the clock read `now_millis`.
    pub fn generate_at<R: Rng + ?Sized>(&self, now_millis: u64, rng: &mut R) -> OrderCode {
        let tick = self.next_tick(now_millis);

        let mut code = String::with_capacity(self.prefix.len() + 16);
        code.push_str(&self.prefix);
        code.push('-');
        code.push_str(&encode_base36(tick));

        for _ in 0..SUFFIX_LEN {
            let symbol = ALPHABET.choose(rng).copied().unwrap_or(b'0');
            code.push(char::from(symbol));
        }

        OrderCode(code)
    }

    /// Up to `attempts` fresh codes, for retrying an insert that hit a
    /// duplicate code.
    pub fn attempts(&self, attempts: NonZeroU8) -> CodeAttempts<'_> {
        CodeAttempts {
            generator: self,
            remaining: attempts.get(),
        }
    }

    fn next_tick(&self, now_millis: u64) -> u64 {
        let mut last = self.last_tick.load(Ordering::Relaxed);

        loop {
            let next = now_millis.max(last.saturating_add(1));

            match self.last_tick.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

impl Default for OrderCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Bounded sequence of fresh codes from a generator.
#[derive(Debug)]
pub struct CodeAttempts<'a> {
    generator: &'a OrderCodeGenerator,
    remaining: u8,
}

impl Iterator for CodeAttempts<'_> {
    type Item = OrderCode;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        Some(self.generator.generate())
    }
}

fn encode_base36(mut value: u64) -> String {
    let mut digits = Vec::with_capacity(13);

    loop {
        let digit = usize::try_from(value % 36).unwrap_or_default();
        digits.push(ALPHABET.get(digit).copied().unwrap_or(b'0'));
        value /= 36;

        if value == 0 {
            break;
        }
    }

    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}
