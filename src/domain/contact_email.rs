/// A parsed email address; used for the visitor's reply address as well as
/// the configured account inbox.
///
/// Must be instantiated with `ContactEmail::parse`.
///
/// The field is left private, to prevent bypassing of `parse`, and mutation
/// of the value.
#[derive(Clone, Debug)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Accepts the `local@domain.tld` shape only: at least one
    /// non-whitespace/non-`@` character, an `@`, at least one such character,
    /// a `.`, and at least one such character. Deliberately looser than full
    /// RFC 5321 parsing; the mail provider has the final say on delivery.
    pub fn parse(email: String) -> Result<Self, String> {
        match has_email_shape(&email) {
            true => Ok(Self(email)),
            false => Err(format!("Invalid email: {email:?}")),
        }
    }
}

fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    // `split_once` also rejects a missing `@`; a second `@` must not appear in
    // the remainder
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // the domain needs a dot with at least one character on each side, so
    // "ann@x." and "ann@.com" are both out
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
