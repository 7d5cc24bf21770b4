//! # gramcache
//!
//! Memoization cache for GramGen code-generation passes.
//!
//! ## Architecture
//! - **MemoCache**: unbounded HashMap store (AHash) keyed by argument identity
//! - **Memo / TryMemo / SharedMemo**: wrapped pure functions, computed at most
//!   once per distinct key; failures are never cached
//! - **CallKey**: canonical (positional, sorted named) argument keys
//!
//! Entries are never evicted: the cache is sized for one bounded
//! code-generation run, not for a long-running service.

#![warn(missing_docs)]

mod cache;
mod error;
mod key;
mod memo;
mod stats;

pub use cache::MemoCache;
pub use error::{Error, Result};
pub use key::{ArgValue, CallKey, FloatKey};
pub use memo::{Memo, SharedMemo, TryMemo};
pub use stats::MemoStats;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let mut add_one = Memo::new(|k: &i64| k + 1);
        assert_eq!(add_one.call(41), 42);
    }
}
