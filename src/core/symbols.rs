//! The fixed pool of card faces.
//!
//! A round draws `difficulty / 2` distinct symbols from this pool and
//! duplicates each. The pool is deliberately larger than the biggest
//! difficulty needs (24 cards = 12 pairs) so every deal differs.

use serde::{Deserialize, Serialize};

/// Every glyph a card face can show.
pub const SYMBOL_POOL: [&str; 33] = [
    "\u{1F34E}", // 🍎
    "\u{1F34C}", // 🍌
    "\u{1F347}", // 🍇
    "\u{1F353}", // 🍓
    "\u{1F352}", // 🍒
    "\u{1F34D}", // 🍍
    "\u{1F95D}", // 🥝
    "\u{1F349}", // 🍉
    "\u{1F350}", // 🍐
    "\u{1F436}", // 🐶
    "\u{1F431}", // 🐱
    "\u{1F42D}", // 🐭
    "\u{1F439}", // 🐹
    "\u{1F430}", // 🐰
    "\u{1F98A}", // 🦊
    "\u{1F43B}", // 🐻
    "\u{1F43C}", // 🐼
    "\u{1F428}", // 🐨
    "\u{1F42F}", // 🐯
    "\u{1F981}", // 🦁
    "\u{1F42E}", // 🐮
    "\u{1F437}", // 🐷
    "\u{1F419}", // 🐙
    "\u{1F991}", // 🦑
    "\u{1F99E}", // 🦞
    "\u{1F980}", // 🦀
    "\u{1F420}", // 🐠
    "\u{1F41F}", // 🐟
    "\u{1F42C}", // 🐬
    "\u{1F308}", // 🌈
    "\u{1F525}", // 🔥
    "\u{2B50}",  // ⭐
    "\u{1F340}", // 🍀
];

/// A card face, identified by its index into [`SYMBOL_POOL`].
///
/// Two cards match when their symbols are equal. The renderer turns a
/// symbol into a glyph via [`Symbol::glyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from a pool index.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(
            (index as usize) < SYMBOL_POOL.len(),
            "symbol index out of pool range"
        );
        Self(index)
    }

    /// Get the raw pool index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The glyph to render for this symbol.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        SYMBOL_POOL[self.0 as usize]
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
