//! Shorthands over [`Scanner`](crate::Scanner) reads.

/// Skip spaces and tabs.
#[macro_export]
macro_rules! space {
    ($scanner:expr) => {{
        $scanner.read_while($crate::text::is_space);
    }};
}

/// Read until the byte is found.
#[macro_export]
macro_rules! until {
    ($scanner:expr, $byte:expr) => {{
        $scanner.read_while(|b| b != $byte)
    }};
}

pub use space;
pub use until;
