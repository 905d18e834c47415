use once_cell::sync::OnceCell;
use regex::Regex;

/// # Panics
///
///  Returns (once), the compiled interface index pattern -- slash delimited numbers with an
///  optional sub-interface suffix, ex: "0/1/0" or "0/0.100". This should realistically never
///  panic.
#[allow(clippy::expect_used)]
pub fn port_index_pattern() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();

    RE.get_or_init(|| {
        Regex::new(r"^\d+(/\d+)*(\.\d+)?$").expect("failed compiling pattern, this is a bug")
    })
}

/// # Panics
///
///  Returns (once), the compiled aaa method list name pattern. This should realistically never
///  panic.
#[allow(clippy::expect_used)]
pub fn method_list_pattern() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();

    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\-.]{1,64}$").expect("failed compiling pattern, this is a bug")
    })
}
