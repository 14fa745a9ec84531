use std::fmt;

use util::Scanner;

/// A parameter.
///
/// This struct represents a parameter in a SIP message,
/// consisting of a name and an optional value.
///
/// # Examples
///
/// ```
/// use sipwire::message::Param;
///
/// let param = Param::from("user=phone");
///
/// assert_eq!(param.name, "user");
/// assert_eq!(param.value, Some("phone"));
/// ```
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct Param<'a> {
    /// The parameter name.
    pub name: &'a str,

    /// The parameter optional value
    pub value: Option<&'a str>,
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(s: &'a str) -> Self {
        match s.split_once('=') {
            Some((name, value)) => Param {
                name: name.trim(),
                value: Some(value.trim()),
            },
            None => Param {
                name: s.trim(),
                value: None,
            },
        }
    }
}

impl fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(self.name),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone)]
/// A collection of SIP parameters, in the order they appeared.
///
/// A parameter takes the form `name=value` and can appear in a SIP message
/// as either a URI parameter or a header parameter.
pub struct Params<'p>(Vec<Param<'p>>);

impl<'p> Params<'p> {
    /// Creates an empty `Params` list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets the value of a parameter by name, ignoring ASCII case.
    ///
    /// The outer `Option` tells whether the parameter exists, the inner one
    /// whether it has a value.
    pub fn get(&self, name: &str) -> Option<Option<&'p str>> {
        self.0
            .iter()
            .find(|param| param.name.eq_ignore_ascii_case(name))
            .map(|param| param.value)
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = &Param<'p>> {
        self.0.iter()
    }

    /// Pushes a name-value parameter pair.
    pub fn push(&mut self, param: Param<'p>) {
        self.0.push(param)
    }

    /// Checks if the parameter list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Writes every parameter prefixed by `;`.
impl fmt::Display for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.0 {
            write!(f, ";{param}")?;
        }
        Ok(())
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for Params<'a> {
    fn from(params: [(&'a str, &'a str); N]) -> Self {
        Self(
            params
                .map(|(name, value)| Param {
                    name,
                    value: Some(value),
                })
                .to_vec(),
        )
    }
}

/// Maps parameter names to the fields that hold them.
///
/// Implemented by every record that pulls named parameters (`tag`, `branch`,
/// `q`, ...) out of a parameter list.
pub trait FieldTable<'a> {
    /// The field for the parameter `name`, or `None` when the name is not
    /// one of the record's named parameters.
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>>;

    /// Stores a parameter that has no dedicated field.
    fn extension(&mut self, param: Param<'a>);
}

impl<'a> FieldTable<'a> for Params<'a> {
    fn slot(&mut self, _name: &str) -> Option<&mut Option<&'a str>> {
        None
    }

    fn extension(&mut self, param: Param<'a>) {
        self.push(param);
    }
}

/// Scans a parameter list separated by any of the `delims` bytes.
///
/// Named parameters go to their slot in `table`: a parameter without a
/// value is stored as `Some("")`. Every other parameter is handed to
/// [`FieldTable::extension`] in encounter order. Empty items are skipped.
///
/// # Examples
///
/// ```
/// use sipwire::message::{scan_params, Params};
///
/// let mut params = Params::new();
/// scan_params(";user=phone;lr", b";", &mut params);
///
/// assert_eq!(params.get("user"), Some(Some("phone")));
/// assert_eq!(params.get("lr"), Some(None));
/// ```
pub fn scan_params<'a, T>(src: &'a str, delims: &[u8], table: &mut T)
where
    T: FieldTable<'a> + ?Sized,
{
    let mut scanner = Scanner::new(src);

    while !scanner.is_eof() {
        let (item, _) = scanner.read_until_any(delims);
        // Skip the delimiter.
        scanner.next();

        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let param = Param::from(item);
        match table.slot(param.name) {
            Some(slot) => *slot = Some(param.value.unwrap_or("")),
            None => table.extension(param),
        }
    }
}
