//! Credential and challenge parameter scanning shared by `Authorization`
//! and `WWW-Authenticate`.

use std::fmt;

use util::{is_space, split_outside_quotes, unquote};

use crate::config::AuthFieldOrder;
use crate::message::{FieldTable, Param};
use crate::parser::ParseCtx;

pub(crate) const DIGEST: &str = "Digest";

/// A record filled from an auth parameter list.
pub(crate) trait AuthFields<'a>: FieldTable<'a> {
    /// Field names in the order senders are expected to write them.
    const CANONICAL_ORDER: &'static [&'static str];
}

/// Reads the scheme token and then every auth parameter into `fields`.
///
/// Returns the scheme, `None` for an empty value.
pub(crate) fn scan_auth<'a, T>(ctx: &mut ParseCtx<'a>, fields: &mut T) -> Option<&'a str>
where
    T: AuthFields<'a>,
{
    let scheme = ctx.read_token()?;
    ctx.skip_ws();

    match ctx.options().auth_field_order {
        AuthFieldOrder::Any => scan_any_order(ctx.remaining(), fields),
        AuthFieldOrder::Canonical => scan_canonical_order(ctx, fields),
    }

    Some(scheme)
}

fn scan_any_order<'a, T>(src: &'a str, fields: &mut T)
where
    T: AuthFields<'a>,
{
    for item in split_outside_quotes(src, b',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let Param { name, value } = Param::from(item);
        let value = value.map(unquote);
        match fields.slot(name) {
            Some(slot) => *slot = Some(value.unwrap_or("")),
            None => fields.extension(Param { name, value }),
        }
    }
}

/// Every field is looked for at the cursor, starting from the one after
/// the last field read. Scanning stops when none of them is there.
fn scan_canonical_order<'a, T>(ctx: &mut ParseCtx<'a>, fields: &mut T)
where
    T: AuthFields<'a>,
{
    let mut expected = 0;

    loop {
        ctx.read_while(|b| is_space(b) || b == b',');
        let rest = ctx.remaining();
        let found = T::CANONICAL_ORDER
            .iter()
            .enumerate()
            .skip(expected)
            .find(|(_, name)| rest.strip_prefix(**name).is_some_and(|r| r.starts_with('=')));
        let Some((pos, name)) = found else {
            if !rest.is_empty() {
                log::trace!("Auth parameters out of order, stopped at: {rest}");
            }
            break;
        };

        ctx.bump_n(name.len() + 1);
        let value = if ctx.consume_if(|b| b == b'"').is_some() {
            let value = ctx.read_until_literal("\",");
            ctx.consume_if(|b| b == b'"');
            value.strip_suffix('"').unwrap_or(value)
        } else {
            ctx.read_until_any(b",").0.trim()
        };

        if let Some(slot) = fields.slot(name) {
            *slot = Some(value);
        }
        expected = pos + 1;
    }
}

/// Writes `scheme name="value", name=value, ...` for every present field.
pub(crate) fn fmt_auth(
    f: &mut fmt::Formatter<'_>,
    scheme: Option<&str>,
    fields: &[(&str, Option<&str>, bool)],
) -> fmt::Result {
    f.write_str(scheme.unwrap_or(DIGEST))?;

    let mut sep = " ";
    for &(name, value, quoted) in fields {
        let Some(value) = value else {
            continue;
        };
        if quoted {
            write!(f, "{sep}{name}=\"{value}\"")?;
        } else {
            write!(f, "{sep}{name}={value}")?;
        }
        sep = ", ";
    }

    Ok(())
}
