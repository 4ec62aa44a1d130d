pub mod assembler;
pub mod fallback;

pub use assembler::assemble;
pub use fallback::fallback;
