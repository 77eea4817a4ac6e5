//! Bulk token ingestion.
//!
//! The only boundary-facing contract of the library: a collaborator (for
//! example a line-reading console shim) supplies a sequence of textual
//! tokens, each token is converted to the element type and spliced in
//! through [`Ring::insert_after_cursor`]. Because every insertion lands
//! right after the cursor and becomes the cursor, ingesting `[a, b, c]`
//! leaves the ring reading `c, a, b` from the cursor.
//!
//! Failure policy is deliberately asymmetric: a malformed token aborts the
//! remaining batch (after being reported), while every other per-token
//! failure is reported, recorded and skipped so ingestion continues. Values
//! inserted before an abort stay inserted.

use crate::error::{Error, Result, TokenError};
use crate::ring::Ring;
use tracing::{error, warn};

/// Conversion of one textual token into an element value.
///
/// Implementations classify their failures through [`TokenError`], which
/// decides whether the ingestion loop aborts ([`TokenError::Format`]) or
/// skips the token and continues (any other kind).
pub trait FromToken: Sized {
    fn from_token(token: &str) -> std::result::Result<Self, TokenError>;
}

macro_rules! from_token_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromToken for $ty {
                fn from_token(token: &str) -> std::result::Result<Self, TokenError> {
                    token.parse().map_err(|_| TokenError::Format)
                }
            }
        )*
    };
}

from_token_via_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl FromToken for String {
    fn from_token(token: &str) -> std::result::Result<Self, TokenError> {
        Ok(token.to_owned())
    }
}

/// A token the ingestion loop skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// 0-based position of the token in the input sequence.
    pub position: usize,
    pub token: String,
    pub reason: TokenError,
}

/// Outcome of a bulk ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of values spliced into the ring.
    pub inserted: usize,
    /// Tokens skipped with a soft failure, in input order.
    pub skipped: Vec<SkippedToken>,
}

/// Converts each token and inserts the result after the cursor.
///
/// Empty tokens are treated as absent values and skipped. A
/// [`TokenError::Format`] failure is fatal: it is reported and propagated
/// as [`Error::Conversion`], aborting the rest of the batch while keeping
/// everything already inserted. All other conversion failures are reported
/// and skipped.
///
/// # Example
///
/// ```rust
/// use corelib::{ingest_tokens, Ring};
///
/// let mut ring: Ring<i64> = Ring::new();
/// let report = ingest_tokens(&mut ring, ["4", "8", "15"])?;
/// assert_eq!(report.inserted, 3);
/// assert_eq!(ring.to_string(), "15 -> 4 -> 8");
/// # Ok::<(), corelib::Error>(())
/// ```
pub fn ingest_tokens<T, I, S>(ring: &mut Ring<T>, tokens: I) -> Result<IngestReport>
where
    T: FromToken,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = IngestReport::default();
    for (position, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();
        if token.is_empty() {
            warn!(position, "skipping empty token");
            report.skipped.push(SkippedToken {
                position,
                token: String::new(),
                reason: TokenError::Empty,
            });
            continue;
        }
        match T::from_token(token) {
            Ok(value) => {
                ring.insert_after_cursor(value);
                report.inserted += 1;
            }
            Err(TokenError::Format) => {
                error!(position, token, "malformed token aborts ingestion");
                return Err(Error::Conversion {
                    token: token.to_owned(),
                });
            }
            Err(reason) => {
                warn!(position, token, %reason, "skipping token");
                report.skipped.push(SkippedToken {
                    position,
                    token: token.to_owned(),
                    reason,
                });
            }
        }
    }
    Ok(report)
}
