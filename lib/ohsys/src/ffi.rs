//! # Definitions of Native Interfaces
//!
//! For all native interfaces the respective raw definitions of constants,
//! structures, types, and functions are provided in this module. This allows
//! use of these definitions outside of possible higher abstractions.
//!
//! The definitions are transposed into Rust following a set of rules and
//! guidelines, thus yielding predictable type names and definitions. The idea
//! is to produce the same predictable result, as if a tool like `bindgen` was
//! used.
//!
//! This module only provides the definitions of the native interfaces, but no
//! implementation. The implementation lives in the system libraries of the
//! target, which are linked if the `link` feature is enabled and the target
//! environment is OpenHarmony.
//!
//! ## Transpose Rules
//!
//! While this module attempts to be a direct mapping to the respective
//! C headers, slight adjustments are usually necessary to account for the
//! peculiarities of Rust:
//!
//!  * All names follow the standard Rust naming scheme, using `CamelCase` for
//!    types, `UPPER_CASE` for constants, and `snake_case` for everything else.
//!
//!  * Prefixes are stripped if the Rust module or type-system provides a
//!    suitable prefix.
//!
//!  * Functions are the exception to the rules above. They retain their C
//!    symbol name verbatim, since the name is what the linker resolves.
//!
//!  * C-enums are always provided as raw integer type, rather than Rust enum
//!    to allow arbitrary discriminants to be used. This is particularly
//!    important when the interface allows for custom/vendor extensions, since
//!    then Rust enums would be unable to represent the unused ranges. The
//!    integer type is `u32` unless an enumerator is negative (`i32`) or the
//!    C-enum has an explicit underlying type.
//!
//!  * Pointers in structures are always represented as `NonNull` or
//!    `Option<NonNull>` and thus strip any `const` annotations. This is on
//!    purpose, since the classic C-const annotations cannot be transposed to
//!    Rust in a sensible way. Function prototypes use raw pointers, keeping
//!    the `const` annotation of the C declaration.
//!
//!  * Opaque C structures are zero-sized types that can only be used behind
//!    pointers. They are neither `Send`, `Sync`, nor `Unpin`.
//!
//!  * Function pointers are represented as `Option<unsafe extern "C" fn>`,
//!    since C allows them to be `NULL`.

pub mod ohos;
