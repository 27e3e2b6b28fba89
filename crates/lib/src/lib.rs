pub mod cli;
pub mod ext;
pub mod heap;
pub mod input;
pub mod source;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::{Opts, Part};
    pub use crate::ext::SliceExt;
    pub use crate::heap::MinHeap;
    pub use crate::input::{IStr, IStrError};
    pub use crate::source::Input;
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayString<const N: usize = 16> = arrayvec::ArrayString<N>;
    pub use bstr::{BStr, ByteSlice};
}
