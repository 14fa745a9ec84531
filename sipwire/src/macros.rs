/// Body of a [`FieldTable::slot`](crate::message::FieldTable::slot)
/// implementation: maps parameter names (ASCII case-insensitive) to
/// fields of `$target`.
macro_rules! field_slots {
    ($name:expr, $target:expr, $($param:expr => $field:ident),* $(,)?) => {{
        $(
            if $name.eq_ignore_ascii_case($param) {
                return Some(&mut $target.$field);
            }
        )*
        None
    }};
}

/// Writes `;name=value` when the value is present.
macro_rules! write_param {
    ($f:expr, $name:expr, $value:expr) => {{
        if let Some(value) = $value {
            write!($f, ";{}={}", $name, value)?;
        }
    }};
}

/// Writes `Name: value\r\n` when the value is present.
macro_rules! write_header {
    ($f:expr, $name:expr, $value:expr) => {{
        if let Some(value) = $value {
            write!($f, "{}: {}\r\n", $name, value)?;
        }
    }};
}

pub(crate) use field_slots;
pub(crate) use write_header;
pub(crate) use write_param;
