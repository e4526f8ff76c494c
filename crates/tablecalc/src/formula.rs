//! The formula chain.
//!
//! ```text
//! Qqn(a, b, c) = a / U(a) + b * T(b) - U(c) * T(c)
//! Qnk(x, y)    = Qqn(x, y, x + y) - Qqn(y, x, x - y)
//! Rnk(x, y)    = x * Qnk(x, y) + y * Qnk(y, x)
//! func(x,y,z)  = Rnk(x, y) + Rnk(y, z) * Rnk(x, y)          → r
//! RText        = CText(Max(x, y, x + z, y + z), text, x)     → k
//! Variant(r,k) = 0.8973 * r + 0.1027 * k
//! ```
//!
//! Every step is pure. Table reads go through [`interpolate`] under the
//! engine's [`Policy`], so the first failing lookup aborts the chain.

use serde::Serialize;

use crate::config::Policy;
use crate::error::CalcError;
use crate::interpolate::interpolate;
use crate::tables::{GTEXT, T, U};

/// Weight of `r` in [`variant`].
pub const R_WEIGHT: f64 = 0.8973;

/// Weight of `k` in [`variant`].
pub const K_WEIGHT: f64 = 0.1027;

/// One set of user inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// First number.
    pub x: f64,
    /// Second number.
    pub y: f64,
    /// Third number.
    pub z: f64,
    /// Text token.
    pub text: String,
}

impl Inputs {
    /// Bundles the four inputs.
    pub fn new(x: f64, y: f64, z: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            text: text.into(),
        }
    }
}

/// Result of a full evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// `func(x, y, z)`.
    pub r: f64,
    /// `RText(x, y, z, text)`.
    pub k: f64,
    /// `Variant(r, k)`.
    pub variant: f64,
}

/// Maximum of four values.
#[inline]
pub fn max4(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a.max(b).max(c).max(d)
}

/// Final blend of `r` and `k`.
#[inline]
pub fn variant(r: f64, k: f64) -> f64 {
    R_WEIGHT * r + K_WEIGHT * k
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { quantity, value })
    }
}

/// Evaluates the formula chain under a fixed [`Policy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    policy: Policy,
}

impl Engine {
    /// Creates an engine using `policy` for every lookup.
    pub const fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// The lookup policy in effect.
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    fn u(&self, key: f64) -> Result<f64, CalcError> {
        interpolate(&U, key, self.policy)
    }

    fn t(&self, key: f64) -> Result<f64, CalcError> {
        interpolate(&T, key, self.policy)
    }

    /// `a / U(a) + b * T(b) - U(c) * T(c)`.
    ///
    /// Lookups run in the order `U(a)`, `T(b)`, `U(c)`, `T(c)`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing lookup.
    pub fn qqn(&self, a: f64, b: f64, c: f64) -> Result<f64, CalcError> {
        let ua = self.u(a)?;
        let tb = self.t(b)?;
        let uc = self.u(c)?;
        let tc = self.t(c)?;
        Ok(a / ua + b * tb - uc * tc)
    }

    /// `Qqn(x, y, x + y) - Qqn(y, x, x - y)`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing lookup.
    pub fn qnk(&self, x: f64, y: f64) -> Result<f64, CalcError> {
        Ok(self.qqn(x, y, x + y)? - self.qqn(y, x, x - y)?)
    }

    /// `x * Qnk(x, y) + y * Qnk(y, x)`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing lookup.
    pub fn rnk(&self, x: f64, y: f64) -> Result<f64, CalcError> {
        Ok(x * self.qnk(x, y)? + y * self.qnk(y, x)?)
    }

    /// `Rnk(x, y) + Rnk(y, z) * Rnk(x, y)`, the value bound to `r`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing lookup.
    pub fn func(&self, x: f64, y: f64, z: f64) -> Result<f64, CalcError> {
        let rxy = self.rnk(x, y)?;
        let ryz = self.rnk(y, z)?;
        Ok(rxy + ryz * rxy)
    }

    /// Selects `max_val + x`, `max_val - x` or `x` from the text token.
    ///
    /// Tokens `"set"` and `"get"` are compared by identity. Under the strict
    /// policy the token must exist in `Gtext`. Under the lenient policy an
    /// empty token yields `0.0` and unknown tokens are not an error.
    ///
    /// # Errors
    ///
    /// [`CalcError::TextKey`] for an unknown token under the strict policy.
    pub fn ctext(&self, max_val: f64, text: &str, x: f64) -> Result<f64, CalcError> {
        match self.policy {
            Policy::Strict => {
                if !GTEXT.contains(text) {
                    return Err(CalcError::TextKey { key: text.to_owned() });
                }
            }
            Policy::Lenient => {
                if text.is_empty() {
                    return Ok(0.0);
                }
                if !GTEXT.contains(text) {
                    log::warn!("text key {text:?} not in {}, passing x through", GTEXT.name());
                }
            }
        }

        Ok(match text {
            "set" => max_val + x,
            "get" => max_val - x,
            _ => x,
        })
    }

    /// `CText(Max(x, y, x + z, y + z), text, x)`, the value bound to `k`.
    ///
    /// # Errors
    ///
    /// See [`Engine::ctext`].
    pub fn rtext(&self, x: f64, y: f64, z: f64, text: &str) -> Result<f64, CalcError> {
        self.ctext(max4(x, y, x + z, y + z), text, x)
    }

    /// Runs `func`, then `rtext`, then [`variant`].
    ///
    /// # Errors
    ///
    /// The first lookup failure in that order, or [`CalcError::NonFinite`]
    /// if `r`, `k` or the blend overflowed.
    pub fn evaluate(&self, inputs: &Inputs) -> Result<Evaluation, CalcError> {
        let Inputs { x, y, z, ref text } = *inputs;
        let r = finite("r", self.func(x, y, z)?)?;
        let k = finite("k", self.rtext(x, y, z, text)?)?;
        let eval = Evaluation {
            r,
            k,
            variant: finite("Variant(r, k)", variant(r, k))?,
        };
        log::debug!("evaluated {inputs:?} under {} policy: {eval:?}", self.policy);
        Ok(eval)
    }
}
