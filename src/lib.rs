//! `hdscan`: large-scale search over non-hardened secp256k1 child public
//! keys derived from a cached BIP32 extended-key tree.
//!
//! Given a small cache of parent extended public keys keyed by a
//! `(b, a)` path prefix and a list of HASH160 address ranges, this
//! crate enumerates a linear counter space, derives each child public
//! key, hashes it, and emits matches against the ranges. The whole
//! pipeline is one enumerated, data-parallel computation per counter
//! value — there is no host I/O, cache population, or device discovery
//! here, only the compute core.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width unsigned integers (`U256`, `U320`, `U512`): limb-wise
//!   add/sub/shift and widening multiply. The big-integer layer
//!   everything else is built on.
//!
//! - `field`
//!   Arithmetic modulo the secp256k1 prime: add, subtract, double,
//!   multiply (Russian peasant), exponentiate (square-and-multiply),
//!   and Fermat inverse.
//!
//! - `secp256k1`
//!   Affine and Jacobian point arithmetic and scalar multiplication by
//!   the base point.
//!
//! - `hash`
//!   SHA-256, SHA-512, RIPEMD-160, HMAC-SHA-512, and HASH160, each
//!   specialized to the one fixed-size message this crate ever feeds
//!   it.
//!
//! - `bip32`
//!   The single non-hardened `CKDpub` derivation step composing the
//!   above.
//!
//! - `search`
//!   The cache, range table, and batch search kernel: the production
//!   entry point, `batch_address_search`.
//!
//! - `kernels`
//!   Thin byte-buffer wrappers over the above, used only by conformance
//!   tests to exercise the documented wire layouts directly.
//!
//! # Design goals
//!
//! - No heap allocation inside the per-work-item kernel body
//! - Minimal and explicit APIs: plain `Debug` error enums, no panics on
//!   malformed host-supplied configuration
//! - Branchless arithmetic wherever the reference kernels are
//!   branchless, so the cost of an operation does not depend on its
//!   operands
//! - Data parallelism realized with `rayon`, the only non-dev
//!   dependency this crate carries

pub mod bip32;
pub mod field;
pub mod hash;
pub mod kernels;
pub mod primitives;
pub mod search;
pub mod secp256k1;
